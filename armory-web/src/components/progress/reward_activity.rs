use std::rc::Rc;

use armory_core::{RewardCategory, RewardEntry, RewardStatus};
use yew::prelude::*;

use crate::i18n::t;
use crate::paths::item_image;

#[derive(Properties, Clone)]
pub struct Props {
    pub entry: RewardEntry,
    pub category: Rc<RewardCategory>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry && Rc::ptr_eq(&self.category, &other.category)
    }
}

/// Status of one reward in a profile-wide milestone.
#[function_component(RewardActivity)]
pub fn reward_activity(props: &Props) -> Html {
    let Some(definition) = props.category.definition(&props.entry) else {
        log::warn!(
            "No reward definition for entry {}",
            props.entry.reward_entry_hash
        );
        return Html::default();
    };
    let status = RewardStatus::of(&props.entry);
    let display = &definition.display;

    html! {
        <div
            class={classes!("milestone-reward-activity", props.entry.earned.then_some("complete"))}
            title={t(status.tooltip_key())}
        >
            <span
                class={classes!("app-icon", format!("icon-{}", status.icon()))}
                aria-hidden="true"
            />
            if let Some(icon) = display.icon.as_deref() {
                <img src={item_image(icon)} />
            }
            <span>{ display.name.clone() }</span>
        </div>
    }
}
