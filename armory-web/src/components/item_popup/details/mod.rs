//! Expanded details section of the item popup.

pub mod view_model;

use armory_core::{ExtraInfo, ItemRef};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{routing, use_app_services};
use crate::i18n::t;
use crate::paths::item_image;
use crate::router::Route;
use view_model::{ItemDetailsViewModel, build_details_view_model};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: ItemRef,
    #[prop_or_default]
    pub extra_info: ExtraInfo,
}

#[function_component(ItemDetails)]
pub fn item_details(props: &Props) -> Html {
    let vm = build_details_view_model(&props.item, &props.extra_info);
    let navigator = use_navigator();
    let services = use_app_services();

    let vendor_link = vm.preview_vendor.clone().map(|(route, label)| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let (Some(navigator), Some(services)) = (navigator.as_ref(), services.as_ref()) {
                routing::navigate(navigator, &services.transitions, route.clone());
            }
        });
        html! {
            <div class="item-description">
                <a href="#" class="preview-vendor" {onclick}>{ label }</a>
            </div>
        }
    });

    html! {
        <div class="item-details-body">
            { render_summary(&vm) }
            { render_perks(&vm) }
            { render_objectives(&vm) }
            { vendor_link.unwrap_or_default() }
            { render_rewards(&vm) }
            { render_collectible(&vm) }
        </div>
    }
}

fn image(src: Option<&str>, title: Option<&str>) -> Html {
    src.map_or_else(Html::default, |src| {
        html! { <img class="item-image" src={src.to_string()} title={title.map(str::to_string)} /> }
    })
}

fn render_summary(vm: &ItemDetailsViewModel) -> Html {
    html! {
        <>
            if let Some(description) = &vm.description {
                <div class="item-description">{ description.clone() }</div>
            }
            if let Some(expiration) = &vm.expiration {
                <div class="item-expiration">{ expiration.clone() }</div>
            }
            if let Some(banner) = &vm.emblem_banner {
                <img class="item-details" src={banner.clone()} width="237" height="48" />
            }
            if let Some(masterwork) = &vm.masterwork {
                <div class="masterwork-progress">
                    { image(masterwork.icon.as_deref(), Some(masterwork.name.as_str())) }
                    {" "}
                    <span>
                        { masterwork.description.clone() }{" "}
                        <strong>{ masterwork.progress.clone() }</strong>
                    </span>
                </div>
            }
            if vm.classified {
                <div class="item-details">{ t("popup.classified") }</div>
            }
            if let Some(compare) = &vm.compare_with {
                <div class="item-details compare">{ compare.clone() }</div>
            }
            if vm.missing_sockets {
                <div class="item-details warning">{ t("popup.missing_sockets") }</div>
            }
        </>
    }
}

fn render_perks(vm: &ItemDetailsViewModel) -> Html {
    if vm.perks.is_empty() {
        return Html::default();
    }
    html! {
        <div class="item-details item-perks">
            { for vm.perks.iter().map(|perk| html! {
                <div class="item-perk" key={perk.hash}>
                    { image(perk.display.icon.as_deref().map(item_image).as_deref(), None) }
                    <div class="item-perk-info">
                        <div class="item-perk-name">{ perk.display.name.clone() }</div>
                        <div class="item-perk-description">
                            { perk.display.description.clone() }
                        </div>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn render_objectives(vm: &ItemDetailsViewModel) -> Html {
    html! {
        <>
            if !vm.objectives.is_empty() {
                <div class="item-objectives item-details">
                    { for vm.objectives.iter().map(|o| html! {
                        <div
                            class={classes!(
                                "objective-row",
                                o.complete.then_some("objective-complete")
                            )}
                            key={o.hash}
                        >
                            <span class="objective-description">{ o.description.clone() }</span>
                            <span class="objective-text">{ o.progress.clone() }</span>
                        </div>
                    }) }
                </div>
            }
            if let Some(flavor) = &vm.flavor {
                <div class="item-objectives item-details">
                    <div class="flavor-objective">
                        { image(flavor.icon.as_deref(), None) }
                        <span>{" "}{ flavor.text.clone() }</span>
                    </div>
                </div>
            }
        </>
    }
}

fn render_rewards(vm: &ItemDetailsViewModel) -> Html {
    if vm.rewards.is_empty() {
        return Html::default();
    }
    html! {
        <div class="item-details">
            <div>{ t("popup.rewards") }</div>
            { for vm.rewards.iter().map(|r| html! {
                <div class="milestone-reward" key={r.item_hash}>
                    { image(r.icon.as_deref(), None) }
                    <span>{ r.label.clone() }</span>
                </div>
            }) }
        </div>
    }
}

fn render_collectible(vm: &ItemDetailsViewModel) -> Html {
    let Some(collectible) = &vm.collectible else {
        return Html::default();
    };
    html! {
        <div class="item-details">
            <div>{ collectible.source.clone() }</div>
            if collectible.owned {
                <div><span class="app-icon owned-icon">{"✓"}</span>{" "}{ t("popup.owned") }</div>
            }
            if collectible.acquired {
                <div>
                    <span class="app-icon acquired-icon">{"✓"}</span>{" "}{ t("popup.acquired") }
                </div>
            }
        </div>
    }
}
