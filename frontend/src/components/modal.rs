use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Backdrop plus dialog box. Clicking the backdrop closes the dialog.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let class = if props.wide { "modal modal-wide" } else { "modal" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class={class} onclick={on_modal_click}>
                <h3 class="modal-title">{props.title.clone()}</h3>
                <div class="modal-content">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
