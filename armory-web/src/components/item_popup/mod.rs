//! The single item popup.
//!
//! [`ItemPopupContainer`] owns the popup controller for the app's lifetime:
//! it subscribes to the popup bus on mount, closes on navigation, and
//! repositions the floating dialog after every render. [`ItemPopup`] is the
//! stateless presentation: a floating dialog with an arrow, or a bottom
//! sheet on narrow viewports.

pub mod body;
pub mod details;
pub mod header;

use std::rc::Rc;

use armory_core::{ExtraInfo, ItemRef, PendingClose, PopupController, PopupHost, PopupTab};
use web_sys::Element;
use yew::prelude::*;

use crate::app::use_app_services;
use crate::components::click_outside::ClickOutside;
use crate::components::hotkeys::use_escape_key;
use crate::components::sheet::Sheet;
use crate::position::DomPositionEngine;
use crate::settings::LocalSettings;
use crate::viewport::use_narrow_viewport;
use body::ItemPopupBody;
use header::ItemPopupHeader;

pub type WebController = PopupController<DomPositionEngine, Rc<LocalSettings>>;

#[derive(Properties, PartialEq, Default)]
pub struct ContainerProps {
    /// Overrides the configured boundary selector
    #[prop_or_default]
    pub boundary_selector: Option<AttrValue>,
}

#[function_component(ItemPopupContainer)]
pub fn item_popup_container(props: &ContainerProps) -> Html {
    let Some(services) = use_app_services() else {
        log::error!("ItemPopupContainer rendered without app services");
        return Html::default();
    };

    let narrow = use_narrow_viewport(services.config.narrow_breakpoint_px);
    let force_update = use_force_update();
    let surface_ref = use_node_ref();
    let pending_close = use_memo((), |_| PendingClose::default());
    let controller = {
        let services = services.clone();
        let boundary = props.boundary_selector.clone();
        let pending_close = (*pending_close).clone();
        use_mut_ref(move || {
            let mut config = (*services.config).clone();
            if let Some(selector) = boundary {
                config = config.with_boundary_selector(selector.as_str());
            }
            WebController::new(DomPositionEngine, Rc::clone(&services.settings), config)
                .with_pending_close(pending_close)
        })
    };

    {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_effect_with(services, move |services| {
            let mounted = PopupHost::new(controller)
                .on_change(move || force_update.force_update())
                .mount(&services.bus, &services.transitions);
            let mounted = match mounted {
                Ok(mounted) => Some(mounted),
                Err(err) => {
                    log::error!("Item popup failed to mount: {err}");
                    None
                }
            };
            move || {
                if let Some(mut mounted) = mounted {
                    mounted.unmount();
                }
            }
        });
    }

    {
        let controller = controller.clone();
        let surface_ref = surface_ref.clone();
        use_effect(move || {
            let surface = if narrow {
                None
            } else {
                surface_ref.cast::<Element>()
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.after_render(surface),
                Err(_) => log::warn!("Item popup busy; skipping reposition"),
            }
        });
    }

    let on_close = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_callback((), move |_: (), _| {
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.on_close(),
                Err(_) => pending_close.request(),
            }
            force_update.force_update();
        })
    };
    let on_tab_changed = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_callback((), move |tab: PopupTab, _| {
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.on_tab_changed(tab),
                Err(_) => log::warn!("Item popup busy; tab change to {tab:?} dropped"),
            }
            force_update.force_update();
        })
    };
    let on_toggle_expanded = {
        let controller = controller.clone();
        use_callback((), move |_: (), _| {
            match controller.try_borrow() {
                Ok(controller) => controller.toggle_expanded_details(),
                Err(_) => log::warn!("Item popup busy; details toggle dropped"),
            }
            force_update.force_update();
        })
    };

    let snapshot = match controller.try_borrow() {
        Ok(controller) => controller.state().view().map(|view| {
            (
                view.item.clone(),
                view.anchor.clone(),
                view.extra_info.clone(),
                view.tab,
                controller.expanded_details(),
            )
        }),
        Err(_) => {
            log::warn!("Item popup busy during render");
            None
        }
    };
    use_escape_key(snapshot.is_some() && !narrow, on_close.clone());

    let Some((item, anchor, extra_info, tab, expanded)) = snapshot else {
        return Html::default();
    };

    html! {
        <ItemPopup
            {item}
            anchor={Some(anchor)}
            {extra_info}
            {tab}
            {expanded}
            {narrow}
            {surface_ref}
            {on_close}
            {on_tab_changed}
            {on_toggle_expanded}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: ItemRef,
    /// Element the popup points at; presses on it do not count as outside clicks
    #[prop_or_default]
    pub anchor: Option<Element>,
    #[prop_or_default]
    pub extra_info: ExtraInfo,
    pub tab: PopupTab,
    pub expanded: bool,
    pub narrow: bool,
    #[prop_or_default]
    pub surface_ref: NodeRef,
    pub on_close: Callback<()>,
    pub on_tab_changed: Callback<PopupTab>,
    pub on_toggle_expanded: Callback<()>,
}

#[function_component(ItemPopup)]
pub fn item_popup(props: &Props) -> Html {
    let tier = props.item.tier.css_class();
    let header = html! {
        <ItemPopupHeader
            item={props.item.clone()}
            expanded={props.expanded}
            on_toggle_expanded={props.on_toggle_expanded.clone()}
        />
    };
    let body = html! {
        <ItemPopupBody
            item={props.item.clone()}
            extra_info={props.extra_info.clone()}
            tab={props.tab}
            expanded={props.expanded}
            on_tab_changed={props.on_tab_changed.clone()}
            on_toggle_expanded={props.on_toggle_expanded.clone()}
        />
    };

    if props.narrow {
        return html! {
            <Sheet
                on_close={props.on_close.clone()}
                {header}
                sheet_class={classes!("item-popup", tier)}
            >
                { body }
            </Sheet>
        };
    }

    html! {
        <div
            class={classes!("move-popup-dialog", tier)}
            ref={props.surface_ref.clone()}
            role="dialog"
            aria-modal="false"
        >
            <ClickOutside on_click_outside={props.on_close.clone()} ignore={props.anchor.clone()}>
                { header }
                { body }
            </ClickOutside>
            <div class={classes!("arrow", tier)} />
        </div>
    }
}
