//! Token Panel: approve collateral, then mint against it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Balance and allowance are read when the panel mounts and whenever the
//! connected account changes. After that they are refreshed by confirmation
//! events (approve re-checks the allowance, mint refreshes the balance and
//! the allowance) and by committing a new amount, which re-checks the
//! allowance against it.

use std::sync::Arc;

use leptos::prelude::*;

use crate::actions::Refresh;
use crate::actions::token::{fetch_allowance, fetch_balance, handle_approve, handle_mint, subscribe_refreshes};
use crate::components::{PanelHandle, prompt_on_error};
use crate::state::notice::NoticeState;
use crate::state::token::{PrimaryAction, TokenPanelState};

#[component]
pub fn TokenPanel() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenPanelState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let handle = PanelHandle::mount();

    let refresh_allowance: Refresh = Arc::new(move || {
        handle.spawn(move |cx| async move { fetch_allowance(&cx, &token).await });
    });
    let refresh_balance: Refresh = Arc::new(move || {
        handle.spawn(move |cx| async move { fetch_balance(&cx, &token).await });
    });
    handle.unsubscribe_on_cleanup(subscribe_refreshes(&handle.events(), refresh_allowance, refresh_balance));

    Effect::new(move |_| {
        let (account, ready) = handle.track_session();
        if account.is_none() || !ready {
            return;
        }
        handle.spawn(move |cx| async move {
            fetch_balance(&cx, &token).await;
            fetch_allowance(&cx, &token).await;
        });
    });

    let on_primary = move |_| {
        let action = token.with_untracked(TokenPanelState::primary_action);
        handle.spawn(move |cx| async move {
            let result = match action {
                PrimaryAction::Approve => handle_approve(&cx, &token, &notices).await,
                PrimaryAction::Mint => handle_mint(&cx, &token, &notices).await,
            };
            prompt_on_error(result);
        });
    };

    let balance = move || {
        token.with(|s| if s.balance_loading { "Loading balance...".to_owned() } else { s.balance_text() })
    };
    let amount = move || token.with(|s| s.amount_text().to_owned());
    let last_hash = move || token.with(|s| s.mint_hash.or(s.approve_hash).map(|h| chain::receipt::short_hash(&h)));

    view! {
        <section class="panel token-panel">
            <div class="panel__section">
                <h2 class="panel__title">"Your Balance"</h2>
                <p class="panel__label">"GOF Token Balance"</p>
                <p class="token-panel__balance">{balance}</p>
                <p class="panel__unit">"GOF"</p>
            </div>
            <div class="panel__section">
                <h2 class="panel__title">"Mint Tokens"</h2>
                <label class="panel__label" for="token-panel-amount">"Amount to Mint"</label>
                <input
                    id="token-panel-amount"
                    class="panel__input"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || token.get().amount_input
                    on:input=move |ev| token.update(|s| s.set_amount(event_target_value(&ev)))
                    on:change=move |_| {
                        handle.spawn(move |cx| async move { fetch_allowance(&cx, &token).await });
                    }
                />
                <Show when=move || token.with(|s| s.last_allowance.is_some())>
                    <p class="panel__hint">
                        "Approved collateral: " {move || token.with(TokenPanelState::allowance_text).unwrap_or_default()}
                    </p>
                </Show>
                <dl class="token-panel__summary">
                    <dt>"Required Collateral"</dt>
                    <dd>{amount}</dd>
                    <dt>"You'll Receive"</dt>
                    <dd>{amount} " GOF"</dd>
                </dl>
                <button
                    class=move || {
                        if token.with(|s| s.primary_action() == PrimaryAction::Mint) {
                            "panel__button panel__button--mint"
                        } else {
                            "panel__button"
                        }
                    }
                    disabled=move || token.with(TokenPanelState::is_busy)
                    on:click=on_primary
                >
                    {move || token.with(TokenPanelState::primary_action_label)}
                </button>
                <Show when=move || last_hash().is_some()>
                    <p class="panel__hint">"Transaction: " {move || last_hash().unwrap_or_default()}</p>
                </Show>
                <Show when=move || token.with(|s| s.mint_succeeded)>
                    <div class="panel__success">"Mint Successful!"</div>
                </Show>
            </div>
        </section>
    }
}
