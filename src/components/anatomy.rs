use yew::prelude::*;

use crate::catalog::{find_area, BODY_AREAS};
use crate::selection::SelectionSet;

#[derive(Properties, PartialEq)]
pub struct AnatomySelectorProps {
    pub selection: SelectionSet,
    pub can_proceed: bool,
    pub on_toggle: Callback<String>,
    pub on_next: Callback<()>,
}

#[function_component(AnatomySelector)]
pub fn anatomy_selector(props: &AnatomySelectorProps) -> Html {
    let toggle = |id: &'static str| {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.to_string()))
    };

    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let count = props.selection.len();

    html! {
        <section class="container section">
          <div class="center">
            <h2 class="h2">{ "Select Your Areas of Concern" }</h2>
            <p class="lead">
              { "Click on the body areas you want insurance coverage for. Our AI will match you with the best plans." }
            </p>
          </div>

          <div class="grid2">
            // Body map
            <div class="card dashed">
              <div class="figure">
                <div class="figureOutline">{ "👤" }</div>
                { for BODY_AREAS.iter().map(|area| {
                    let selected = props.selection.contains(area.id);
                    html! {
                      <button
                        key={area.id}
                        title={area.name}
                        class={classes!("spot", area.accent.class(), selected.then_some("selected"))}
                        style={area.position_style()}
                        onclick={toggle(area.id)}
                      >
                        { area.icon.glyph() }
                      </button>
                    }
                })}
              </div>
            </div>

            <div class="stack">
              <div class="card">
                <h3>{ format!("Selected Areas ({count})") }</h3>
                if props.selection.is_empty() {
                  <p class="muted center pad">{ "Click on body areas to select your insurance priorities" }</p>
                } else {
                  <div class="list">
                    // Ids missing from the catalog are skipped.
                    { for props.selection.iter().filter_map(find_area).map(|area| html! {
                        <div key={area.id} class="listRow">
                          <div class="row">
                            <span class={classes!("glyph", area.accent.class())}>{ area.icon.glyph() }</span>
                            <span class="strong">{ area.name }</span>
                          </div>
                          <button class="ghost small" onclick={toggle(area.id)}>{ "✕" }</button>
                        </div>
                    })}
                  </div>
                }
              </div>

              if !props.selection.is_empty() {
                <div class="card tinted">
                  <h4>{ "Coverage Insights" }</h4>
                  <div class="muted small">
                    <p>{ format!("• {count} specialized coverage areas selected") }</p>
                    <p>{ "• AI matching will prioritize these areas in plan comparison" }</p>
                    <p>{ "• Blockchain verification ensures accurate coverage details" }</p>
                  </div>
                  <button class="accentBtn wide" disabled={!props.can_proceed} onclick={on_next}>
                    { "Find My Insurance Plans →" }
                  </button>
                </div>
              }
            </div>
          </div>
        </section>
    }
}
