//! NFT Gallery operations: enumerate mintable ids, mint one by URI.

#[cfg(test)]
#[path = "nft_test.rs"]
mod nft_test;

use chain::ChainError;
use chain::contracts::{NftCollection, saturating_u64};
use chain::events::{SubscriptionId, TxEvents, TxKind};

use super::{ActionContext, ActionError, Refresh, report_failure};
use crate::state::Store;
use crate::state::nft::{NftGalleryState, NftListing, build_listing};
use crate::state::notice::{NoticeSource, NoticeState};

async fn read_listing(cx: &ActionContext) -> Result<Vec<NftListing>, ChainError> {
    let collection = NftCollection::new(cx.contracts.nft);
    let reader = cx.session.reader.as_ref();
    let total_minted = saturating_u64(collection.total_minted(reader).await?);
    let remaining = saturating_u64(collection.remaining_supply(reader).await?);
    let base_uri = collection.base_uri(reader).await?;
    Ok(build_listing(total_minted, remaining, &base_uri))
}

/// Rebuild the listing from chain. Any read failure empties it.
pub async fn enumerate(cx: &ActionContext, gallery: &impl Store<NftGalleryState>) {
    gallery.modify(|s| s.loading = true);
    let result = read_listing(cx).await;
    gallery.modify(|s| {
        match result {
            Ok(items) => s.items = items,
            Err(e) => {
                leptos::logging::warn!("nft listing read failed: {e}");
                s.items.clear();
            }
        }
        s.loading = false;
    });
}

/// Mint `token_id` by submitting its metadata URI.
///
/// # Errors
///
/// [`ActionError::NotConnected`] without a wallet, [`ActionError::Busy`]
/// while another gallery mint is outstanding.
pub async fn handle_mint(
    cx: &ActionContext,
    gallery: &impl Store<NftGalleryState>,
    notices: &impl Store<NoticeState>,
    token_id: u64,
    token_uri: &str,
) -> Result<(), ActionError> {
    cx.require_wallet()?;
    if !gallery.peek(NftGalleryState::can_mint) {
        return Err(ActionError::Busy);
    }
    notices.modify(|n| n.clear_source(NoticeSource::NftGallery));
    gallery.modify(|s| s.minting = Some(token_id));

    let tx = NftCollection::new(cx.contracts.nft).mint(token_uri);
    let outcome = cx.submit_and_confirm(TxKind::NftMint, tx, |_| {}).await;
    gallery.modify(|s| s.minting = None);

    match outcome {
        Ok(_) => notices.modify(|n| {
            n.success(NoticeSource::NftGallery, "NFT Minted", &format!("NFT #{token_id} minted successfully!"));
        }),
        Err(e) => report_failure(notices, NoticeSource::NftGallery, "Mint failed.", &e),
    }
    Ok(())
}

/// Confirmed gallery mints re-enumerate the listing.
pub fn subscribe_refreshes(events: &TxEvents, refresh: Refresh) -> Vec<SubscriptionId> {
    vec![events.on_confirmed(TxKind::NftMint, move |_| refresh())]
}
