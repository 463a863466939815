use yew::prelude::*;

use crate::catalog::Accent;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_get_started: Callback<()>,
}

const FEATURES: &[(&str, &str, &str, Accent)] = &[
    (
        "👁",
        "Visual Selection",
        "Point and click on body areas that concern you most for personalized insurance matching",
        Accent::Primary,
    ),
    (
        "🛡",
        "Blockchain Security",
        "Every policy and claim is cryptographically verified for complete transparency",
        Accent::Blockchain,
    ),
    (
        "👥",
        "User-Centric",
        "Designed for real people, not insurance experts. Simple, clear, and empowering",
        Accent::Trust,
    ),
];

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let on_start = {
        let cb = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="hero">
          <div class="container center">
            <div class={classes!("pill", Accent::Trust.class())}>{ "🛡 Blockchain-Verified Security" }</div>

            <h1 class="heroTitle">
              { "Health Insurance" }
              <span class="gradientText">{ "Made Simple" }</span>
            </h1>
            <p class="lead">
              { "Select your areas of concern on an interactive body map, compare transparent insurance plans, \
                 and secure your coverage with blockchain-verified integrity." }
            </p>

            <div class="btnRow center">
              <button class="accentBtn big" onclick={on_start}>{ "Start Your Journey →" }</button>
              // No demo video yet.
              <button class="ghost big">{ "Watch Demo" }</button>
            </div>

            <div class="grid3">
              { for FEATURES.iter().map(|(glyph, title, body, accent)| html! {
                  <div class={classes!("card", accent.class())}>
                    <div class="iconTile">{ *glyph }</div>
                    <h3>{ *title }</h3>
                    <p class="muted">{ *body }</p>
                  </div>
              })}
            </div>
          </div>
        </section>
    }
}
