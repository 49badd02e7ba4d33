//! The fixed poster content.
//!
//! Everything the poster shows is defined here as literal data: region
//! rectangles, section dividers, the technology legend, connector arrows,
//! and the title block. Coordinates are chart units in a 0-100 × 0-100
//! space with the y-axis pointing up (the space the poster was designed
//! in); the renderer flips and scales them onto the SVG canvas.

use crate::palette::Swatch;

/// Horizontal extent of the chart space.
pub const CHART_WIDTH: f32 = 100.0;
/// Vertical extent of the chart space.
pub const CHART_HEIGHT: f32 = 100.0;

/// Default sideways bow applied to flow arrows.
const ARROW_ARC: f32 = 0.1;

/// A point in chart space (y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
}

impl ChartPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A labeled rectangle. `x`/`y` name the bottom-left corner in chart
/// space.
#[derive(Debug, Clone)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub title: &'static str,
    pub sublabels: &'static [&'static str],
    pub border: Swatch,
    pub fill: Swatch,
    pub text: Swatch,
}

/// A centered caption separating groups of regions.
#[derive(Debug, Clone)]
pub struct Divider {
    pub y: f32,
    pub caption: &'static str,
}

/// One category/value pair of the technology legend.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub x: f32,
    pub category: &'static str,
    pub stack: &'static str,
}

/// A rotated caption attached to a connector.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub at: ChartPoint,
    pub text: &'static str,
    pub rotation_degrees: f32,
}

/// A directed arrow between two chart points.
#[derive(Debug, Clone)]
pub struct Connector {
    pub from: ChartPoint,
    pub to: ChartPoint,
    pub color: Swatch,
    pub width: f32,
    /// Sideways bow of the arc; positive bows left of the travel
    /// direction, zero draws a straight segment.
    pub curvature: f32,
    pub annotation: Option<Annotation>,
}

/// The complete poster definition.
#[derive(Debug, Clone)]
pub struct PosterContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,
    pub title_anchor: ChartPoint,
    pub subtitle_anchor: ChartPoint,
    pub footer_anchor: ChartPoint,
    pub legend_category_y: f32,
    pub legend_stack_y: f32,
    pub regions: Vec<Region>,
    pub dividers: Vec<Divider>,
    pub legend: Vec<LegendEntry>,
    pub connectors: Vec<Connector>,
}

fn region(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    title: &'static str,
    sublabels: &'static [&'static str],
    border: Swatch,
) -> Region {
    Region {
        x,
        y,
        width,
        height,
        title,
        sublabels,
        border,
        fill: Swatch::DarkSurface,
        text: Swatch::White,
    }
}

fn arrow(from: (f32, f32), to: (f32, f32), color: Swatch) -> Connector {
    Connector {
        from: ChartPoint::new(from.0, from.1),
        to: ChartPoint::new(to.0, to.1),
        color,
        width: 1.5,
        curvature: ARROW_ARC,
        annotation: None,
    }
}

/// Builds the fixed ATLAS poster content.
///
/// The layout reads top to bottom: the prompt layer, the three AI worker
/// divisions, the shared platform services, the SaaS assembly line, and
/// the deployment layer, with the technology legend at the bottom and a
/// feedback loop running up the right edge.
pub fn poster() -> PosterContent {
    let regions = vec![
        // Prompt & input layer
        region(
            5.0,
            85.0,
            25.0,
            7.0,
            "PROMPT & PRODUCT BUILDER UI",
            &["Natural Language Input", "Domain Templates", "Visual Configurator"],
            Swatch::AuroraCyan,
        ),
        region(
            37.0,
            85.0,
            26.0,
            7.0,
            "PROMPT ORCHESTRATOR",
            &["AI Architect Agent", "AI Coder Agent", "QA Agent", "DevOps Agent"],
            Swatch::AuroraViolet,
        ),
        region(
            70.0,
            85.0,
            25.0,
            7.0,
            "DOMAIN INTELLIGENCE GRAPH",
            &["Vector DB (pgvector)", "Ontologies & RAG", "Context Engine"],
            Swatch::AuroraMagenta,
        ),
        // AI worker divisions
        region(
            5.0,
            66.0,
            28.0,
            11.0,
            "BioAI DIVISION",
            &[
                "Biomedical Engineering",
                "EEG/ECG/HRV Analysis",
                "DICOM & PACS Integration",
                "HIPAA Compliance",
                "PHI Governance",
            ],
            Swatch::AccentGreen,
        ),
        region(
            36.0,
            66.0,
            28.0,
            11.0,
            "PhotonAI DIVISION",
            &[
                "Photonics & Optoelectronics",
                "FDTD/COMSOL/Lumerical",
                "Band-gap Optimization",
                "Inverse Design",
                "Waveguide Synthesis",
            ],
            Swatch::AuroraCyan,
        ),
        region(
            67.0,
            66.0,
            28.0,
            11.0,
            "ElectroAI DIVISION",
            &[
                "Electronics & Semiconductor",
                "Yield/SPC/FDC Analytics",
                "CMP/Etch/Litho",
                "Predictive Maintenance",
                "Tool Fault Detection",
            ],
            Swatch::AuroraViolet,
        ),
        // Shared platform services
        region(
            5.0,
            49.0,
            28.0,
            11.0,
            "SIMULATION & MODELING HUB",
            &[
                "Python APIs: COMSOL, Lumerical",
                "ANSYS, MATLAB Integration",
                "Batch Parameter Sweeps",
                "HIL Hooks",
            ],
            Swatch::AccentOrange,
        ),
        region(
            36.0,
            49.0,
            28.0,
            11.0,
            "DataOps & ML-Ops CORE",
            &[
                "Feature Store",
                "MLflow Model Registry",
                "Triton Inference Server",
                "Auto-Train/Eval Pipelines",
            ],
            Swatch::AuroraMagenta,
        ),
        region(
            67.0,
            49.0,
            28.0,
            11.0,
            "COMPLIANCE & GOVERNANCE",
            &[
                "HIPAA / ISO 13485 / ISO 9001",
                "Audit Trails & PIAs",
                "Model Cards",
                "Data Lineage",
            ],
            Swatch::AccentRed,
        ),
        // SaaS assembly & frontend
        region(
            5.0,
            32.0,
            43.0,
            11.0,
            "SAAS ASSEMBLY LINE",
            &[
                "Code Generation → Testing → CI/CD",
                "Docker/Kubernetes Orchestration",
                "GitHub Actions Pipelines",
                "Infrastructure as Code (Terraform)",
            ],
            Swatch::AuroraCyan,
        ),
        region(
            52.0,
            32.0,
            43.0,
            11.0,
            "FRONTEND AUTOMATION LAYER",
            &[
                "Next.js 15 / React / TypeScript",
                "React Three Fiber (3D)",
                "D3.js Dashboards",
                "Multi-tenant UI System",
                "White-label Builder",
            ],
            Swatch::AuroraViolet,
        ),
        // Deployment & monitoring
        region(
            5.0,
            15.0,
            43.0,
            11.0,
            "DEPLOYMENT CLOUD",
            &[
                "Vercel / Render / AWS / GCP / Azure",
                "Multi-tenant Routing",
                "Billing Integration (Stripe)",
                "SSO & Auth (OIDC)",
            ],
            Swatch::AccentGreen,
        ),
        region(
            52.0,
            15.0,
            43.0,
            11.0,
            "MONITORING & FEEDBACK LOOP",
            &[
                "OpenTelemetry → Prometheus/Grafana",
                "A/B Evaluation & Canary Deploys",
                "Auto-rollback Mechanisms",
                "Continual Learning with DIG",
            ],
            Swatch::AccentOrange,
        ),
    ];

    let dividers = vec![
        Divider {
            y: 79.0,
            caption: "─── AI WORKER DIVISIONS ───",
        },
        Divider {
            y: 62.0,
            caption: "─── SHARED PLATFORM SERVICES ───",
        },
        Divider {
            y: 45.0,
            caption: "─── SaaS ASSEMBLY LINE ───",
        },
        Divider {
            y: 28.0,
            caption: "─── DEPLOYMENT & OBSERVABILITY ───",
        },
        Divider {
            y: 10.0,
            caption: "─── CORE TECHNOLOGY STACK ───",
        },
    ];

    let legend = vec![
        LegendEntry {
            x: 8.0,
            category: "AI Core",
            stack: "Claude, GPT, LangGraph, CrewAI",
        },
        LegendEntry {
            x: 26.0,
            category: "Backend",
            stack: "NestJS, PostgreSQL, Redis, NATS",
        },
        LegendEntry {
            x: 44.0,
            category: "Frontend",
            stack: "Next.js, React, TailwindCSS",
        },
        LegendEntry {
            x: 62.0,
            category: "DevOps",
            stack: "Docker, K8s, Terraform, GitHub Actions",
        },
        LegendEntry {
            x: 80.0,
            category: "ML",
            stack: "PyTorch, MLflow, Triton",
        },
    ];

    let mut connectors = vec![
        // Prompt layer, left to right
        arrow((30.0, 88.0), (37.0, 88.0), Swatch::AuroraCyan),
        arrow((63.0, 88.0), (70.0, 88.0), Swatch::AuroraCyan),
        // Orchestrator fan-out to the divisions
        arrow((50.0, 85.0), (19.0, 77.0), Swatch::AuroraViolet),
        arrow((50.0, 85.0), (50.0, 77.0), Swatch::AuroraViolet),
        arrow((50.0, 85.0), (81.0, 77.0), Swatch::AuroraViolet),
        // Divisions down into the platform services
        arrow((19.0, 66.0), (19.0, 60.0), Swatch::Silver),
        arrow((50.0, 66.0), (50.0, 60.0), Swatch::Silver),
        arrow((81.0, 66.0), (81.0, 60.0), Swatch::Silver),
        // Platform services into the assembly line
        arrow((19.0, 49.0), (26.0, 43.0), Swatch::Silver),
        arrow((50.0, 49.0), (50.0, 43.0), Swatch::Silver),
        arrow((81.0, 49.0), (74.0, 43.0), Swatch::Silver),
        // Assembly into deployment
        arrow((26.0, 32.0), (26.0, 26.0), Swatch::Silver),
        arrow((74.0, 32.0), (74.0, 26.0), Swatch::Silver),
    ];

    // Feedback loop running back up the right edge
    connectors.push(Connector {
        from: ChartPoint::new(95.0, 20.0),
        to: ChartPoint::new(95.0, 60.0),
        color: Swatch::AccentOrange,
        width: 2.0,
        curvature: -0.3,
        annotation: Some(Annotation {
            at: ChartPoint::new(97.0, 40.0),
            text: "Feedback\nLoop",
            rotation_degrees: 90.0,
        }),
    });

    PosterContent {
        title: "ATLAS - ADVANCED TECHNOLOGY LABS",
        subtitle: "Building the Intelligence that Builds the Future",
        footer: "© 2025 ATLAS - Advanced Technology Labs for Applied Sciences",
        title_anchor: ChartPoint::new(50.0, 97.0),
        subtitle_anchor: ChartPoint::new(50.0, 94.0),
        footer_anchor: ChartPoint::new(50.0, 1.0),
        legend_category_y: 6.0,
        legend_stack_y: 4.0,
        regions,
        dividers,
        legend,
        connectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_counts() {
        let content = poster();
        assert_eq!(content.regions.len(), 13);
        assert_eq!(content.dividers.len(), 5);
        assert_eq!(content.legend.len(), 5);
        assert_eq!(content.connectors.len(), 14);
    }

    #[test]
    fn test_every_region_has_sublabels() {
        for region in poster().regions {
            assert!(
                !region.sublabels.is_empty(),
                "region `{}` has no sublabels",
                region.title
            );
        }
    }

    #[test]
    fn test_regions_lie_within_chart_bounds() {
        for region in poster().regions {
            assert!(region.x >= 0.0 && region.x + region.width <= CHART_WIDTH);
            assert!(region.y >= 0.0 && region.y + region.height <= CHART_HEIGHT);
        }
    }

    #[test]
    fn test_connector_endpoints_lie_within_chart_bounds() {
        for connector in poster().connectors {
            for point in [connector.from, connector.to] {
                assert!(point.x >= 0.0 && point.x <= CHART_WIDTH);
                assert!(point.y >= 0.0 && point.y <= CHART_HEIGHT);
            }
        }
    }

    #[test]
    fn test_exactly_one_annotated_feedback_loop() {
        let content = poster();
        let annotated: Vec<_> = content
            .connectors
            .iter()
            .filter(|connector| connector.annotation.is_some())
            .collect();

        assert_eq!(annotated.len(), 1);
        let feedback = annotated[0];
        assert!(feedback.curvature < 0.0, "feedback loop must bow outward");
        assert_eq!(feedback.color, Swatch::AccentOrange);
        // It points upward: the arrow ends above where it starts
        assert!(feedback.to.y > feedback.from.y);
    }

    #[test]
    fn test_poster_is_reproducible() {
        let first = poster();
        let second = poster();

        assert_eq!(first.title, second.title);
        assert_eq!(first.regions.len(), second.regions.len());
        for (a, b) in first.regions.iter().zip(second.regions.iter()) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.sublabels, b.sublabels);
            assert_eq!(a.border, b.border);
        }
        for (a, b) in first.connectors.iter().zip(second.connectors.iter()) {
            assert_eq!(a.from, b.from);
            assert_eq!(a.to, b.to);
            assert_eq!(a.color, b.color);
        }
    }
}
