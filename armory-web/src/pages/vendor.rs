use std::collections::BTreeMap;

use yew::prelude::*;

use crate::i18n::tr;

#[derive(Properties, PartialEq)]
pub struct VendorPageProps {
    pub id: u32,
}

#[function_component(VendorPage)]
pub fn vendor_page(props: &VendorPageProps) -> Html {
    let id = props.id.to_string();
    let mut args = BTreeMap::new();
    args.insert("id", id.as_str());
    html! {
        <section class="vendor">
            <h2>{ tr("vendor.heading", Some(&args)) }</h2>
        </section>
    }
}
