use serde::{Deserialize, Serialize};

/// Industry sector selected on the audit form.
///
/// Only chooses narrative copy; it never changes the numbers. Unknown labels
/// fall back to [`Industry::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Industry {
    #[default]
    Manufacturing,
    Energy,
    Logistics,
    Defense,
    Other,
}

/// Promotional copy shown next to the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryContext {
    pub savings_hook: &'static str,
    pub hero_stat: &'static str,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Manufacturing,
        Industry::Energy,
        Industry::Logistics,
        Industry::Defense,
        Industry::Other,
    ];

    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(label))
            .unwrap_or(Industry::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::Energy => "Energy",
            Self::Logistics => "Logistics",
            Self::Defense => "Defense",
            Self::Other => "Other",
        }
    }

    pub fn context(&self) -> IndustryContext {
        match self {
            Self::Manufacturing => IndustryContext {
                savings_hook: "Machining and assembly lines that analyze vibration, temperature, and acoustic signatures early see dramatic scrap and warranty reductions.",
                hero_stat: "Top Tier 1 auto supplier cut downtime response from 45 minutes to 6 minutes with edge anomaly detection.",
            },
            Self::Energy => IndustryContext {
                savings_hook: "Utilities avoid cascading failures by fusing transformer, weather, and SCADA feeds at the edge.",
                hero_stat: "Combined-cycle plant prevented two turbine trips, protecting ₹34 Cr in output within the first quarter.",
            },
            Self::Logistics => IndustryContext {
                savings_hook: "Fleet-wide telemetry fused in real-time avoids cold-chain spoilage and loading bay gridlock.",
                hero_stat: "National logistics operator improved asset utilization by 18% after deploying Sensyva nodes to yards.",
            },
            Self::Defense => IndustryContext {
                savings_hook: "Multi-sensor fusion enables mission-critical systems to go from reactive maintenance to pre-emptive readiness.",
                hero_stat: "A radar OEM reduced mission aborts by 72% by pairing Sensyva’s edge stack with existing BMS sensors.",
            },
            Self::Other => IndustryContext {
                savings_hook: "Sensor-rich environments—from pharmaceuticals to mining—gain clarity when silent data streams become decisions.",
                hero_stat: "Sensyva deployments routinely surface ROI within 90 days by turning dormant data into actionable foresight.",
            },
        }
    }
}

impl From<String> for Industry {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
