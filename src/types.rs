use serde::{Deserialize, Serialize};
use std::fmt;

//==============================================================================
// Palette
//==============================================================================

/// Named colours used by every sheet. Values are exact RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteColor {
    PurpleGrad,
    LightPurple,
    LightBlue,
    DarkGray,
    White,
    Purple,
    Blue,
    Green,
    Orange,
    Cyan,
    Pink,
    Yellow,
    Red,
    Indigo,
    LightGray,
    Black,
    Amber,
    Gray700,
    Blue500,
    Green500,
    Red600,
}

impl PaletteColor {
    /// 24-bit RGB value
    pub fn rgb(self) -> u32 {
        match self {
            PaletteColor::PurpleGrad => 0x8B5CF6,
            PaletteColor::LightPurple => 0xF3E8FF,
            PaletteColor::LightBlue => 0xDBEAFE,
            PaletteColor::DarkGray => 0x374151,
            PaletteColor::White => 0xFFFFFF,
            PaletteColor::Purple => 0xA78BFA,
            PaletteColor::Blue => 0x60A5FA,
            PaletteColor::Green => 0x34D399,
            PaletteColor::Orange => 0xFB923C,
            PaletteColor::Cyan => 0x22D3EE,
            PaletteColor::Pink => 0xF472B6,
            PaletteColor::Yellow => 0xFBBF24,
            PaletteColor::Red => 0xEF4444,
            PaletteColor::Indigo => 0x6366F1,
            PaletteColor::LightGray => 0xE5E7EB,
            PaletteColor::Black => 0x000000,
            PaletteColor::Amber => 0xF59E0B,
            PaletteColor::Gray700 => 0x6B7280,
            PaletteColor::Blue500 => 0x3B82F6,
            PaletteColor::Green500 => 0x10B981,
            PaletteColor::Red600 => 0xDC2626,
        }
    }

    /// CSS-style hex string, e.g. `#8B5CF6`
    pub fn hex(self) -> String {
        format!("#{:06X}", self.rgb())
    }
}

//==============================================================================
// Agent attributes
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

impl Impact {
    pub const ALL: [Impact; 3] = [Impact::High, Impact::Medium, Impact::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Medium => "MEDIUM",
            Impact::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Status {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::NotStarted,
        Status::Planning,
        Status::InProgress,
        Status::Complete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::Planning => "Planning",
            Status::InProgress => "In Progress",
            Status::Complete => "Complete",
        }
    }
}

/// Owner-assigned rating. Stored as the dropdown label so the sheet's
/// "text contains" highlighting keys off the leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "5 - Critical")]
    Critical,
    #[serde(rename = "4 - High")]
    High,
    #[serde(rename = "3 - Medium")]
    Medium,
    #[serde(rename = "2 - Low")]
    Low,
    #[serde(rename = "1 - Not Now")]
    NotNow,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::NotNow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "5 - Critical",
            Priority::High => "4 - High",
            Priority::Medium => "3 - Medium",
            Priority::Low => "2 - Low",
            Priority::NotNow => "1 - Not Now",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_via_as_str!(Impact, Complexity, Status, Priority);

//==============================================================================
// Records
//==============================================================================

/// One candidate agent idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentIdea {
    pub area: String,
    pub name: String,
    pub description: String,
    /// Free text, e.g. "3 hours". Never parsed.
    pub time_saved: String,
    pub impact: Impact,
    pub complexity: Complexity,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default)]
    pub quick_win: bool,
}

fn default_font_color() -> PaletteColor {
    PaletteColor::White
}

/// Presentation group of agents, rendered as a coloured header band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub color: PaletteColor,
    #[serde(default = "default_font_color")]
    pub font_color: PaletteColor,
    pub agents: Vec<AgentIdea>,
}

/// Free-text figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub quick_win_hours: String,
    pub total_hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub title: String,
    pub subtitle: String,
    pub color: PaletteColor,
}

/// The whole dataset behind the workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub dashboard: Dashboard,
    pub categories: Vec<Category>,
    pub phases: Vec<Phase>,
}

impl Portfolio {
    /// All agents in presentation order, paired with their category
    pub fn agents(&self) -> impl Iterator<Item = (&Category, &AgentIdea)> {
        self.categories
            .iter()
            .flat_map(|c| c.agents.iter().map(move |a| (c, a)))
    }

    pub fn quick_wins(&self) -> impl Iterator<Item = &AgentIdea> {
        self.agents().map(|(_, a)| a).filter(|a| a.quick_win)
    }

    pub fn agent_count(&self) -> usize {
        self.categories.iter().map(|c| c.agents.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex() {
        assert_eq!(PaletteColor::PurpleGrad.hex(), "#8B5CF6");
        assert_eq!(PaletteColor::Black.hex(), "#000000");
        assert_eq!(PaletteColor::Red600.hex(), "#DC2626");
    }

    #[test]
    fn test_palette_serde_names() {
        let yaml = serde_yaml::to_string(&PaletteColor::Gray700).unwrap();
        assert_eq!(yaml.trim(), "gray700");
        let color: PaletteColor = serde_yaml::from_str("purpleGrad").unwrap();
        assert_eq!(color, PaletteColor::PurpleGrad);
    }

    #[test]
    fn test_enum_text_matches_serialized_form() {
        for status in Status::ALL {
            let yaml = serde_yaml::to_string(&status).unwrap();
            assert_eq!(yaml.trim().trim_matches('\''), status.as_str());
        }
        for priority in Priority::ALL {
            let parsed: Priority =
                serde_yaml::from_str(&format!("'{}'", priority.as_str())).unwrap();
            assert_eq!(parsed, priority);
        }
    }

    #[test]
    fn test_agent_defaults() {
        let yaml = r#"
area: Personal
name: Travel Coordinator
description: Books travel.
time_saved: 2 hours
impact: LOW
complexity: Low
"#;
        let agent: AgentIdea = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(agent.status, Status::NotStarted);
        assert_eq!(agent.priority, None);
        assert!(agent.notes.is_empty());
        assert!(!agent.quick_win);
    }

    #[test]
    fn test_unknown_impact_rejected() {
        let result: Result<Impact, _> = serde_yaml::from_str("CRITICAL");
        assert!(result.is_err());
    }
}
