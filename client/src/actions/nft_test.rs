use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chain::testing;
use chain::U256;
use futures::executor::block_on;

use super::*;
use crate::actions::test_support::{Fixture, contracts, shared};
use crate::state::notice::NoticeLevel;

const TOTAL: &str = "totalMinted()";
const REMAINING: &str = "remainingSupply()";
const BASE_URI: &str = "_baseURI()";

fn seeded(total: u64, remaining: u64, base: &str) -> Fixture {
    let fx = Fixture::connected();
    fx.reader.set_uint(TOTAL, U256::from(total));
    fx.reader.set_uint(REMAINING, U256::from(remaining));
    fx.reader.set_string(BASE_URI, base);
    fx
}

// =============================================================
// enumerate
// =============================================================

#[test]
fn enumerate_builds_contiguous_listing() {
    let fx = seeded(5, 3, "ipfs://abc/");
    let gallery = shared::<NftGalleryState>();

    block_on(enumerate(&fx.cx, &gallery));

    let state = gallery.lock().unwrap();
    let ids: Vec<u64> = state.items.iter().map(|i| i.token_id).collect();
    assert_eq!(ids, vec![5, 6, 7]);
    assert_eq!(state.items[2].uri, "ipfs://abc/7");
    assert!(!state.loading);
    assert_eq!(fx.reader.targets_of(TOTAL), vec![contracts().nft]);
}

#[test]
fn any_read_failure_empties_listing() {
    let fx = Fixture::connected();
    fx.reader.set_uint(TOTAL, U256::from(5u64));
    fx.reader.set_uint(REMAINING, U256::from(3u64));
    let gallery = shared::<NftGalleryState>();
    gallery.lock().unwrap().items = build_listing(0, 2, "old/");

    block_on(enumerate(&fx.cx, &gallery));

    let state = gallery.lock().unwrap();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn enumerate_works_without_wallet() {
    let fx = Fixture::disconnected();
    fx.reader.set_uint(TOTAL, U256::ZERO);
    fx.reader.set_uint(REMAINING, U256::from(2u64));
    fx.reader.set_string(BASE_URI, "https://meta.example/");
    let gallery = shared::<NftGalleryState>();

    block_on(enumerate(&fx.cx, &gallery));

    assert_eq!(gallery.lock().unwrap().items.len(), 2);
}

// =============================================================
// handle_mint
// =============================================================

#[test]
fn mint_submits_uri_and_reenumerates_after_confirmation() {
    let fx = seeded(5, 3, "ipfs://abc/");
    fx.reader.push_receipt(Ok(Some(testing::success_receipt(testing::hash(1)))));
    let refreshes = Arc::new(AtomicUsize::new(0));
    let inner = refreshes.clone();
    subscribe_refreshes(
        &fx.events,
        Arc::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let gallery = shared::<NftGalleryState>();
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &gallery, &notices, 6, "ipfs://abc/6")).unwrap();

    let sent = fx.writer.sent();
    assert_eq!(sent[0].to, contracts().nft);
    assert_eq!(sent[0].data, NftCollection::new(contracts().nft).mint("ipfs://abc/6").data);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(gallery.lock().unwrap().minting, None);
    let notices = notices.lock().unwrap();
    assert_eq!(notices.items[0].level, NoticeLevel::Success);
    assert_eq!(notices.items[0].message, "NFT #6 minted successfully!");
}

#[test]
fn mint_failure_is_reported_and_clears_flag() {
    let fx = Fixture::connected();
    fx.writer.push_result(Err(ChainError::Rpc { code: 4001, message: "denied".to_owned() }));
    let gallery = shared::<NftGalleryState>();
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &gallery, &notices, 1, "ipfs://abc/1")).unwrap();

    assert_eq!(gallery.lock().unwrap().minting, None);
    assert!(notices.lock().unwrap().has_errors(NoticeSource::NftGallery));
}

#[test]
fn outstanding_mint_blocks_others() {
    let fx = Fixture::connected();
    let gallery = shared::<NftGalleryState>();
    gallery.lock().unwrap().minting = Some(3);
    let notices = shared::<NoticeState>();

    let result = block_on(handle_mint(&fx.cx, &gallery, &notices, 4, "ipfs://abc/4"));

    assert_eq!(result, Err(ActionError::Busy));
    assert!(fx.writer.sent().is_empty());
}

#[test]
fn mint_requires_signer() {
    let fx = Fixture::disconnected();
    let gallery = shared::<NftGalleryState>();
    let notices = shared::<NoticeState>();

    let result = block_on(handle_mint(&fx.cx, &gallery, &notices, 4, "ipfs://abc/4"));

    assert_eq!(result, Err(ActionError::NotConnected));
}
