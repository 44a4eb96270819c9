use std::rc::Rc;

use yew::prelude::*;

use crate::app::services::load_milestones;
use crate::components::progress::RewardActivity;
use crate::i18n::t;

#[function_component(ProgressPage)]
pub fn progress_page() -> Html {
    let milestones = use_memo((), |_| load_milestones());
    let category = use_memo((), {
        let category = milestones.category.clone();
        move |_| category
    });

    html! {
        <section class="progress">
            <h2>{ t("progress.milestones") }</h2>
            <div class="milestone-rewards">
                { for milestones.entries.iter().map(|entry| html! {
                    <RewardActivity
                        key={entry.reward_entry_hash}
                        entry={*entry}
                        category={Rc::clone(&category)}
                    />
                }) }
            </div>
        </section>
    }
}
