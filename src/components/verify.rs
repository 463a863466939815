use gloo::console::log;
use yew::prelude::*;

use crate::catalog::Accent;
use crate::clock::{BrowserClock, Clock};
use crate::verification::{StageStatus, VerificationAction, VerificationProgress, STAGES};

#[derive(Properties, PartialEq)]
pub struct BlockchainVerificationProps {
    pub selected_count: usize,
    pub interval_ms: u32,
    pub network_label: AttrValue,
    pub on_back: Callback<()>,
}

fn stage_class(status: StageStatus) -> Classes {
    match status {
        StageStatus::Done => classes!("stage", "done", Accent::Trust.class()),
        StageStatus::Active => classes!("stage", "active", Accent::Blockchain.class()),
        StageStatus::Pending => classes!("stage", "pending"),
    }
}

#[function_component(BlockchainVerification)]
pub fn blockchain_verification(props: &BlockchainVerificationProps) -> Html {
    let progress = use_reducer(VerificationProgress::new);

    // One interval per activation, torn down on unmount.
    {
        let dispatcher = progress.dispatcher();
        use_effect_with(props.interval_ms, move |period| {
            let handle = BrowserClock.every(*period, move || dispatcher.dispatch(VerificationAction::Tick));
            move || drop(handle)
        });
    }

    {
        let settled = progress.is_settled();
        let hash = progress.tx_hash().map(str::to_string);
        use_effect_with(settled, move |settled| {
            if *settled {
                log!(format!("verification settled, tx {}", hash.unwrap_or_default()));
            }
            || ()
        });
    }

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let current = progress.step_index();
    let complete = progress.is_complete();
    let pct = progress.progress_pct();

    html! {
        <section class="container section">
          <div class="row header">
            <button class="ghost" onclick={on_back}>{ "← Back to Comparison" }</button>
            <div>
              <h2 class="h2">{ "Blockchain Verification" }</h2>
              <p class="muted">{ "Securing your insurance policy on the blockchain" }</p>
            </div>
          </div>

          <div class="narrow stack">
            <div class={classes!("card", "tinted", Accent::Blockchain.class())}>
              <div class="center">
                <div class="iconTile">{ "🛡" }</div>
                <h3>{ "Blockchain Security in Progress" }</h3>
                <p class="muted">
                  { "Your policy is being cryptographically secured for maximum transparency and trust" }
                </p>
              </div>

              <div class="progress" role="progressbar" aria-valuenow={pct.to_string()}>
                <div class="progressFill" style={format!("width:{pct}%;")}></div>
              </div>

              <div class="list">
                { for STAGES.iter().enumerate().map(|(i, stage)| {
                    let status = progress.stage_status(i);
                    html! {
                      <div key={stage.id} class={stage_class(status)}>
                        <span class="glyph">{ stage.glyph }</span>
                        <span class="grow">{ stage.label }</span>
                        {
                          match status {
                            StageStatus::Done => html! { <span>{ "✔" }</span> },
                            StageStatus::Active => html! { <span class="spin">{ "⏱" }</span> },
                            StageStatus::Pending => html! {},
                          }
                        }
                      </div>
                    }
                })}
              </div>
              <div class="small muted">{ format!("Stage {} of {}", current + 1, STAGES.len()) }</div>
            </div>

            if let Some(hash) = progress.tx_hash() {
              <div class="card">
                <h4>{ "# Transaction Details" }</h4>
                <div class="kv"><span class="muted">{ "Transaction Hash:" }</span>
                  <span class="badge secondary code">{ format!("{hash}...") }</span></div>
                <div class="kv"><span class="muted">{ "Network:" }</span>
                  <span>{ props.network_label.to_string() }</span></div>
                <div class="kv"><span class="muted">{ "Coverage Areas:" }</span>
                  <span>{ format!("{} areas", props.selected_count) }</span></div>
                <div class="kv"><span class="muted">{ "Verification Status:" }</span>
                  <span class={classes!("badge", if complete { Accent::Trust.class() } else { Accent::Blockchain.class() })}>
                    { if complete { "Verified" } else { "Processing" } }
                  </span></div>
              </div>
            }

            if complete {
              <div class={classes!("card", "tinted", "center", Accent::Trust.class())}>
                <div class="iconTile">{ "✔" }</div>
                <h3 class="h2">{ "Verification Complete!" }</h3>
                <p class="muted">
                  { "Your insurance policy has been successfully secured on the blockchain. \
                     You now have immutable proof of coverage with complete transparency." }
                </p>
                <div class="btnRow center">
                  <button class="accentBtn">{ "Download Policy Certificate" }</button>
                  <button class="ghost">{ "View on Blockchain Explorer" }</button>
                </div>
              </div>
            }
          </div>
        </section>
    }
}
