use gloo::timers::future::TimeoutFuture;
use shared::ToastLevel;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_library::ToastEntry;

const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<ToastEntry>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            {for props.toasts.iter().map(|entry| html! {
                <ToastItem
                    key={entry.id}
                    entry={entry.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: ToastEntry,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss
    use_effect_with(props.entry.id, {
        let on_dismiss = props.on_dismiss.clone();
        move |id: &u32| {
            let id = *id;
            spawn_local(async move {
                TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                on_dismiss.emit(id);
            });
            || ()
        }
    });

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.entry.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.entry.toast.level {
        ToastLevel::Success => "toast toast-success",
        ToastLevel::Error => "toast toast-error",
    };

    html! {
        <div class={class} onclick={on_click}>
            {props.entry.toast.message.clone()}
        </div>
    }
}
