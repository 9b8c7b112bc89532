//! Contract Interaction Panel: oracle price, balance, mint and redeem by amount.

use std::sync::Arc;

use leptos::prelude::*;

use crate::actions::Refresh;
use crate::actions::contract::{handle_mint, handle_redeem, refresh_data, subscribe_refreshes};
use crate::components::{PanelHandle, prompt_on_error};
use crate::state::contract::ContractPanelState;
use crate::state::notice::NoticeState;

#[component]
pub fn ContractPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<ContractPanelState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let handle = PanelHandle::mount();

    let refresh: Refresh = Arc::new(move || {
        handle.spawn(move |cx| async move { refresh_data(&cx, &panel).await });
    });
    handle.unsubscribe_on_cleanup(subscribe_refreshes(&handle.events(), refresh));

    Effect::new(move |_| {
        let (_, ready) = handle.track_session();
        if ready {
            handle.spawn(move |cx| async move { refresh_data(&cx, &panel).await });
        }
    });

    let on_refresh = move |_| handle.spawn(move |cx| async move { refresh_data(&cx, &panel).await });
    let on_mint = move |_| {
        handle.spawn(move |cx| async move { prompt_on_error(handle_mint(&cx, &panel, &notices).await) });
    };
    let on_redeem = move |_| {
        handle.spawn(move |cx| async move { prompt_on_error(handle_redeem(&cx, &panel, &notices).await) });
    };
    let busy = move || panel.with(|s| s.tx_pending);

    view! {
        <section class="panel contract-panel">
            <h2 class="panel__title">"Gold Token Contract"</h2>
            <div class="contract-panel__stats">
                <div>
                    <p class="panel__label">"Gold Price"</p>
                    <p class="contract-panel__value">{move || panel.with(ContractPanelState::price_text)}</p>
                </div>
                <div>
                    <p class="panel__label">"Last Updated"</p>
                    <p class="contract-panel__value">{move || panel.with(ContractPanelState::updated_text)}</p>
                </div>
                <div>
                    <p class="panel__label">"Your Balance"</p>
                    <p class="contract-panel__value">{move || panel.with(|s| s.balance.clone())} " GOF"</p>
                </div>
            </div>
            <button
                class="panel__button panel__button--secondary"
                disabled=move || panel.with(|s| s.price_loading)
                on:click=on_refresh
            >
                {move || if panel.with(|s| s.price_loading) { "Refreshing..." } else { "Refresh" }}
            </button>

            <div class="contract-panel__form">
                <label class="panel__label" for="contract-panel-mint">"Mint Amount"</label>
                <input
                    id="contract-panel-mint"
                    class="panel__input"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || panel.get().mint_input
                    on:input=move |ev| panel.update(|s| s.mint_input = event_target_value(&ev))
                />
                <button class="panel__button" disabled=busy on:click=on_mint>"Mint"</button>
            </div>
            <div class="contract-panel__form">
                <label class="panel__label" for="contract-panel-redeem">"Redeem Amount"</label>
                <input
                    id="contract-panel-redeem"
                    class="panel__input"
                    type="text"
                    inputmode="decimal"
                    placeholder="0.00"
                    prop:value=move || panel.get().redeem_input
                    on:input=move |ev| panel.update(|s| s.redeem_input = event_target_value(&ev))
                />
                <button class="panel__button" disabled=busy on:click=on_redeem>"Redeem"</button>
            </div>

            <p class="panel__hint">
                "Last transaction: "
                <span class="contract-panel__hash">{move || panel.with(ContractPanelState::last_tx_text)}</span>
                <Show when=busy>" (pending)"</Show>
            </p>
        </section>
    }
}
