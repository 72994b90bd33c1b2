use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub loading: bool,
}

/// Full-screen spinner blocking input while a request is in flight
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.loading {
        return html! {};
    }

    html! {
        <div class="loading-overlay">
            <div class="loading-spinner"></div>
        </div>
    }
}
