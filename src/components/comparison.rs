use yew::prelude::*;

use crate::catalog::{fmt_usd, Accent, PlanRecord, PLANS};
use crate::selection::SelectionSet;
use crate::wizard::comparison_subtitle;

#[derive(Properties, PartialEq)]
pub struct InsuranceComparisonProps {
    pub selection: SelectionSet,
    pub on_back: Callback<()>,
    pub on_select_plan: Callback<()>,
}

pub fn plan_button_label(chosen: Option<&str>, plan_id: &str) -> &'static str {
    if chosen == Some(plan_id) {
        "Selected"
    } else {
        "Select Plan"
    }
}

fn plan_card(plan: &'static PlanRecord, chosen: Option<&str>, on_pick: Callback<&'static str>) -> Html {
    let is_chosen = chosen == Some(plan.id);
    let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(plan.id));
    let tier = plan.match_tier().accent();

    html! {
        <div key={plan.id} class={classes!("card", "plan", is_chosen.then_some("chosen"))} {onclick}>
          <div class="planBody">
            <div class="row">
              <h3>{ plan.name }</h3>
              <span class="badge secondary">{ plan.provider }</span>
              if plan.verified {
                <span class={classes!("badge", Accent::Trust.class())}>{ "🛡 Verified" }</span>
              }
            </div>

            <div class="row muted small">
              <span>{ format!("★ {:.1}", plan.rating) }</span>
              <span class={classes!("strong", tier.class())}>{ format!("{}% Match", plan.match_score) }</span>
            </div>

            <div class="grid3">
              <div class="stat">
                <div class="statValue">{ fmt_usd(plan.monthly_premium) }</div>
                <div class="muted small">{ "Monthly Premium" }</div>
              </div>
              <div class="stat">
                <div class="statValue">{ fmt_usd(plan.deductible) }</div>
                <div class="muted small">{ "Annual Deductible" }</div>
              </div>
              <div class="stat">
                <div class="statValue">{ format!("{}%", plan.coverage_pct) }</div>
                <div class="muted small">{ "Coverage After Deductible" }</div>
              </div>
            </div>

            <ul class="features">
              { for plan.features.iter().map(|f| html! {
                  <li><span class={Accent::Trust.class()}>{ "✓ " }</span>{ *f }</li>
              })}
            </ul>
          </div>

          <div class="planAction">
            <button class={if is_chosen { "accentBtn wide" } else { "ghost wide" }}>
              { plan_button_label(chosen, plan.id) }
            </button>
          </div>
        </div>
    }
}

#[function_component(InsuranceComparison)]
pub fn insurance_comparison(props: &InsuranceComparisonProps) -> Html {
    // Screen-local: forgotten when the user goes back to the selection step.
    let chosen = use_state(|| None::<&'static str>);

    let on_pick = {
        let chosen = chosen.clone();
        Callback::from(move |id: &'static str| chosen.set(Some(id)))
    };

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_proceed = {
        let cb = props.on_select_plan.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="container section">
          <div class="row header">
            <button class="ghost" onclick={on_back}>{ "← Back to Selection" }</button>
            <div>
              <h2 class="h2">{ "Insurance Plan Comparison" }</h2>
              <p class="muted">{ comparison_subtitle(&props.selection) }</p>
            </div>
          </div>

          <div class="stack">
            { for PLANS.iter().map(|p| plan_card(p, *chosen, on_pick.clone())) }
          </div>

          if chosen.is_some() {
            <div class="btnRow center">
              <button class="accentBtn big" onclick={on_proceed}>
                { "Proceed to Blockchain Verification →" }
              </button>
            </div>
          }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_chosen_plan_reads_selected() {
        let chosen = Some("premium");
        let labels: Vec<_> = PLANS.iter().map(|p| plan_button_label(chosen, p.id)).collect();
        assert_eq!(labels, ["Select Plan", "Selected", "Select Plan"]);
    }

    #[test]
    fn nothing_selected_before_a_click() {
        assert!(PLANS.iter().all(|p| plan_button_label(None, p.id) == "Select Plan"));
    }
}
