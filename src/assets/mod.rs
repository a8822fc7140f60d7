//! Asset-provider collaborator contract.

pub mod provider;
pub mod static_assets;

pub use provider::AssetProvider;
pub use static_assets::StaticAssets;
