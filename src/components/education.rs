use yew::prelude::*;

use crate::catalog::{BadgeVariant, EducationResource, RESOURCES};

fn resource_card(r: &EducationResource) -> Html {
    let tone = r.kind.accent().map(|a| a.class()).unwrap_or("neutral");

    html! {
        <div class="card resource">
          <div class={classes!("iconTile", tone)}>{ r.kind.glyph() }</div>
          <div class="grow">
            <div class="row">
              <span class={BadgeVariant::for_category(r.category).class()}>{ r.category }</span>
              <span class="muted small">{ r.duration }</span>
            </div>
            <h3>{ r.title }</h3>
            <p class="muted small">{ r.description }</p>
          </div>
          <button class="ghost wide">{ "Learn More →" }</button>
        </div>
    }
}

#[function_component(EducationHub)]
pub fn education_hub() -> Html {
    html! {
        <section class="container section soft">
          <div class="center">
            <h2 class="h2">{ "Education & Resources" }</h2>
            <p class="lead">
              { "Empower yourself with knowledge. Learn about insurance, blockchain technology, and make informed decisions." }
            </p>
          </div>

          <div class="grid4">
            { for RESOURCES.iter().map(resource_card) }
          </div>

          <div class="card tinted narrow center">
            <h3 class="h2">{ "Stay Informed" }</h3>
            <p class="muted">{ "Get the latest updates on blockchain insurance technology and policy changes" }</p>
            // Newsletter signup is display-only; there is nothing to submit to.
            <div class="btnRow center">
              <input type="email" placeholder="Enter your email" />
              <button class="accentBtn">{ "Subscribe" }</button>
            </div>
          </div>
        </section>
    }
}
