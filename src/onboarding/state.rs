//! Wizard state machine — form steps, wizard stages, and the session state
//! the server keeps between requests.

use serde::{Deserialize, Serialize};

use crate::brand::model::{AssetKind, BrandInputs, GeneratedAssets};
use crate::llm::Role;

/// Fields collected one at a time by the guided form.
///
/// Progresses linearly: CompanyName → Tagline → Industry → BrandStyle →
/// PrimaryColor → SecondaryColor → Complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormStep {
    CompanyName,
    Tagline,
    Industry,
    BrandStyle,
    PrimaryColor,
    SecondaryColor,
    Complete,
}

/// Steps that ask the user a question, in order.
pub const FORM_STEPS: [FormStep; 6] = [
    FormStep::CompanyName,
    FormStep::Tagline,
    FormStep::Industry,
    FormStep::BrandStyle,
    FormStep::PrimaryColor,
    FormStep::SecondaryColor,
];

impl FormStep {
    pub fn next(&self) -> Option<FormStep> {
        use FormStep::*;
        match self {
            CompanyName => Some(Tagline),
            Tagline => Some(Industry),
            Industry => Some(BrandStyle),
            BrandStyle => Some(PrimaryColor),
            PrimaryColor => Some(SecondaryColor),
            SecondaryColor => Some(Complete),
            Complete => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::fmt::Display for FormStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CompanyName => "companyName",
            Self::Tagline => "tagline",
            Self::Industry => "industry",
            Self::BrandStyle => "brandStyle",
            Self::PrimaryColor => "primaryColor",
            Self::SecondaryColor => "secondaryColor",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

/// Screens of the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStage {
    #[default]
    Welcome,
    CompanyInfo,
    BrandStyle,
    Inspiration,
    Review,
    Generating,
    Preview,
    Download,
}

impl WizardStage {
    pub fn next(&self) -> Option<WizardStage> {
        use WizardStage::*;
        match self {
            Welcome => Some(CompanyInfo),
            CompanyInfo => Some(BrandStyle),
            BrandStyle => Some(Inspiration),
            Inspiration => Some(Review),
            Review => Some(Generating),
            Generating => Some(Preview),
            Preview => Some(Download),
            Download => None,
        }
    }
}

impl std::fmt::Display for WizardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::CompanyInfo => "company-info",
            Self::BrandStyle => "brand-style",
            Self::Inspiration => "inspiration",
            Self::Review => "review",
            Self::Generating => "generating",
            Self::Preview => "preview",
            Self::Download => "download",
        };
        write!(f, "{s}")
    }
}

/// One turn of the wizard conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Role,
    pub content: String,
}

/// Everything the wizard remembers for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_stage: WizardStage,
    pub brand_inputs: BrandInputs,
    pub generated_assets: GeneratedAssets,
    pub is_generating: bool,
    pub chat_history: Vec<ChatEntry>,
}

impl WizardState {
    pub fn set_stage(&mut self, stage: WizardStage) {
        self.current_stage = stage;
    }

    /// Move to the following stage. Returns the new stage, or `None` when
    /// already at the last one.
    pub fn advance(&mut self) -> Option<WizardStage> {
        let next = self.current_stage.next()?;
        self.current_stage = next;
        Some(next)
    }

    /// Merge present fields of `update` over the collected inputs.
    pub fn update_inputs(&mut self, update: BrandInputs) {
        self.brand_inputs.merge(update.normalized());
    }

    pub fn reset_inputs(&mut self) {
        self.brand_inputs = BrandInputs::default();
    }

    pub fn set_assets(&mut self, assets: GeneratedAssets) {
        self.generated_assets = assets;
    }

    pub fn update_asset(&mut self, kind: AssetKind, value: String) {
        *self.generated_assets.slot_mut(kind) = value;
    }

    pub fn set_generating(&mut self, generating: bool) {
        self.is_generating = generating;
    }

    pub fn add_chat_message(&mut self, role: Role, content: impl Into<String>) {
        self.chat_history.push(ChatEntry {
            role,
            content: content.into(),
        });
    }

    pub fn clear_chat_history(&mut self) {
        self.chat_history.clear();
    }

    /// Back to a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
