use std::collections::BTreeMap;

use armory_core::{ExtraInfo, ItemRef, PopupTab, available_tabs};
use yew::prelude::*;

use super::details::ItemDetails;
use crate::i18n::{t, tr};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: ItemRef,
    #[prop_or_default]
    pub extra_info: ExtraInfo,
    pub tab: PopupTab,
    pub expanded: bool,
    pub on_tab_changed: Callback<PopupTab>,
    pub on_toggle_expanded: Callback<()>,
}

#[function_component(ItemPopupBody)]
pub fn item_popup_body(props: &Props) -> Html {
    let tabs = available_tabs(&props.item);
    // A tab the item does not offer falls back to the overview.
    let tab = if tabs.contains(&props.tab) {
        props.tab
    } else {
        PopupTab::Overview
    };

    let tab_strip = (tabs.len() > 1).then(|| {
        html! {
            <div class="move-popup-tabs" role="tablist">
                { for tabs.iter().map(|&candidate| {
                    let on_tab_changed = props.on_tab_changed.clone();
                    let onclick =
                        Callback::from(move |_: MouseEvent| on_tab_changed.emit(candidate));
                    let selected = candidate == tab;
                    html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("move-popup-tab", selected.then_some("selected"))}
                            aria-selected={selected.to_string()}
                            {onclick}
                        >
                            { t(candidate.label_key()) }
                        </button>
                    }
                }) }
            </div>
        }
    });

    let content = match tab {
        PopupTab::Overview => render_overview(props),
        PopupTab::Reviews => render_reviews(props),
    };

    html! {
        <div class="move-popup-details">
            { tab_strip.unwrap_or_default() }
            <div class="move-popup-tab-content" role="tabpanel">{ content }</div>
        </div>
    }
}

fn render_overview(props: &Props) -> Html {
    if props.expanded {
        return html! {
            <ItemDetails item={props.item.clone()} extra_info={props.extra_info.clone()} />
        };
    }
    let on_expand = {
        let cb = props.on_toggle_expanded.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="item-overview">
            if let Some(description) = props.item.description.as_ref().filter(|d| !d.is_empty()) {
                <div class="item-description">{ description.clone() }</div>
            }
            <button type="button" class="item-popup-expand" onclick={on_expand}>
                { t("popup.details.show") }
            </button>
        </div>
    }
}

fn render_reviews(props: &Props) -> Html {
    let item = &props.item;
    if item.review_count == 0 {
        return html! { <div class="item-reviews empty">{ t("reviews.none") }</div> };
    }
    let score = item
        .review_score
        .map(|score| format!("{score:.1}"))
        .unwrap_or_default();
    let count = item.review_count.to_string();
    let mut score_args = BTreeMap::new();
    score_args.insert("score", score.as_str());
    let mut count_args = BTreeMap::new();
    count_args.insert("count", count.as_str());

    html! {
        <div class="item-reviews">
            <span class="review-score">{ tr("reviews.score", Some(&score_args)) }</span>
            {" "}
            <span class="review-count">{ tr("reviews.count", Some(&count_args)) }</span>
        </div>
    }
}
