//! Brand generation: inputs and generated models, prompts, the text
//! generators, and the orchestrator that assembles the asset bundle.

pub mod generator;
pub mod model;
pub mod orchestrator;
pub mod prompts;
pub mod routes;

pub use model::{BrandCopy, BrandInputs, DesignTokens, EnrichedBrandInputs, GeneratedAssets};
pub use orchestrator::{AssetOrchestrator, ResolvedBrand};
pub use routes::{BrandRouteState, brand_routes};
