//! NFT Gallery state.
//!
//! The listing is the contiguous id range `total_minted ..
//! total_minted + remaining_supply`, each id paired with `base_uri + id`. It
//! is rebuilt from chain on mount and after each confirmed mint.

#[cfg(test)]
#[path = "nft_test.rs"]
mod nft_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NftListing {
    pub token_id: u64,
    pub uri: String,
}

#[derive(Clone, Debug, Default)]
pub struct NftGalleryState {
    pub items: Vec<NftListing>,
    pub loading: bool,
    /// Token id whose mint is outstanding.
    pub minting: Option<u64>,
}

impl NftGalleryState {
    #[must_use]
    pub fn is_minting(&self, token_id: u64) -> bool {
        self.minting == Some(token_id)
    }

    /// Mints are serialized: any outstanding mint blocks the others.
    #[must_use]
    pub fn can_mint(&self) -> bool {
        self.minting.is_none()
    }
}

/// Mintable ids with their metadata URIs.
#[must_use]
pub fn build_listing(total_minted: u64, remaining_supply: u64, base_uri: &str) -> Vec<NftListing> {
    let end = total_minted.saturating_add(remaining_supply);
    (total_minted..end)
        .map(|token_id| NftListing { token_id, uri: format!("{base_uri}{token_id}") })
        .collect()
}
