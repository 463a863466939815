// src/main.rs: Anatomy Insure (Rust + Yew + WASM)
// Three-step demo wizard: pick body areas, compare mock plans, watch a fake
// blockchain verification. All data is static; nothing leaves the browser.

mod catalog;
mod clock;
mod components;
mod config;
mod selection;
mod verification;
mod wizard;

use gloo::console::{log, warn};
use yew::prelude::*;

use components::{
    AnatomySelector, BlockchainVerification, EducationHub, HeroSection, InsuranceComparison, Navigation,
};
use config::AppConfig;
use wizard::{WizardAction, WizardState, WizardStep};

#[function_component(App)]
fn app() -> Html {
    let loaded = use_state(AppConfig::load);
    let wizard = use_reducer(WizardState::default);

    // Report a broken config block once
    {
        let err = loaded.1.clone();
        use_effect_with((), move |_| {
            if let Some(e) = err {
                warn!(format!("{e}; using defaults"));
            }
            || ()
        });
    }

    {
        use_effect_with(wizard.step, move |step| {
            log!(format!("wizard step: {}", step.label()));
            || ()
        });
    }

    // Handlers
    let on_toggle = {
        let wizard = wizard.dispatcher();
        Callback::from(move |id: String| wizard.dispatch(WizardAction::Toggle(id)))
    };
    let on_next = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: ()| wizard.dispatch(WizardAction::Next))
    };
    let on_back = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: ()| wizard.dispatch(WizardAction::Back))
    };
    let on_restart = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: ()| wizard.dispatch(WizardAction::Restart))
    };

    let (cfg, cfg_err) = &*loaded;

    let screen = match wizard.step {
        WizardStep::Select => html! {
            <>
              <HeroSection on_get_started={on_restart} />
              <AnatomySelector
                selection={wizard.selection.clone()}
                can_proceed={wizard.can_proceed()}
                {on_toggle}
                {on_next}
              />
            </>
        },
        WizardStep::Compare => html! {
            <InsuranceComparison
              selection={wizard.selection.clone()}
              {on_back}
              on_select_plan={on_next}
            />
        },
        WizardStep::Verify => html! {
            <BlockchainVerification
              selected_count={wizard.selection.len()}
              interval_ms={cfg.verify_interval_ms}
              network_label={AttrValue::from(cfg.network_label.clone())}
              {on_back}
            />
        },
    };

    html! {
        <div class="page">
          <Navigation />
          { screen }
          <EducationHub />

          if let Some(e) = cfg_err.clone() {
            <div class="small container">
              <span class="code">{ format!("CONFIG: {}", e) }</span>
            </div>
          }
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
