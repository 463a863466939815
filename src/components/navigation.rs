use yew::prelude::*;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    html! {
        <nav class="nav">
          <div class="container navRow">
            <div class="brand">
              <div class="logo">{ "🛡" }</div>
              <div>
                <div class="h1">{ "Anatomy Insure" }</div>
                <div class="sub">{ "Blockchain-Verified Health Coverage" }</div>
              </div>
            </div>

            <div class="navLinks">
              <a>{ "How It Works" }</a>
              <a>{ "Blockchain Security" }</a>
              <a>{ "Education" }</a>
            </div>

            <div class="row">
              <button class="ghost">{ "Log In" }</button>
              <button class="accentBtn">{ "Get Started" }</button>
            </div>
          </div>
        </nav>
    }
}
