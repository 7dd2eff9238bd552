//! Editor dialogs, one per content kind, all built from the same widgets
//! and all driven by the generic draft model. Each dialog renders nothing
//! while its draft is closed, so `render` can simply emit them all.

pub mod items;
pub mod property;
pub mod sections;
pub mod social;
pub mod widgets;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{EditMsg, Msg};
use super::state::AdminDashboard;
use crate::editor::DraftAction;

pub fn render(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    html! {
        <>
            { sections::hero_dialog(component, ctx) }
            { sections::about_dialog(component, ctx) }
            { sections::property_section_dialog(component, ctx) }
            { sections::why_dialog(component, ctx) }
            { sections::cta_dialog(component, ctx) }
            { sections::services_dialog(component, ctx) }
            { sections::testimonials_dialog(component, ctx) }
            { sections::related_dialog(component, ctx) }
            { sections::final_cta_dialog(component, ctx) }
            { sections::property_page_dialog(component, ctx) }
            { sections::logo_dialog(component, ctx) }
            { sections::contact_dialog(component, ctx) }
            { sections::copyright_dialog(component, ctx) }
            { items::about_stat_dialog(component, ctx) }
            { items::why_reason_dialog(component, ctx) }
            { items::service_dialog(component, ctx) }
            { items::testimonial_dialog(component, ctx) }
            { property::property_dialog(component, ctx) }
            { social::social_dialog(component, ctx) }
        </>
    }
}

/// Shallow merge for text inputs: clone the draft value, change one field,
/// re-submit as a `Set` action. An `apply` that leaves the value untouched
/// (input normalization rejecting the text) silently restores the field.
pub fn set_field<T, W, F>(
    link: &Scope<AdminDashboard>,
    wrap: W,
    value: &T,
    apply: F,
) -> Callback<InputEvent>
where
    T: Clone + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let value = value.clone();
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut value = value.clone();
        apply(&mut value, input.value());
        Msg::Edit(wrap(DraftAction::Set(value)))
    })
}

/// Same as [`set_field`] for `<textarea>`.
pub fn set_area<T, W, F>(
    link: &Scope<AdminDashboard>,
    wrap: W,
    value: &T,
    apply: F,
) -> Callback<InputEvent>
where
    T: Clone + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let value = value.clone();
    link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let mut value = value.clone();
        apply(&mut value, area.value());
        Msg::Edit(wrap(DraftAction::Set(value)))
    })
}

/// Same as [`set_field`] for `<select>` elements.
pub fn set_select<T, W, F>(
    link: &Scope<AdminDashboard>,
    wrap: W,
    value: &T,
    apply: F,
) -> Callback<Event>
where
    T: Clone + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let value = value.clone();
    link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut value = value.clone();
        apply(&mut value, select.value());
        Msg::Edit(wrap(DraftAction::Set(value)))
    })
}

/// Checkbox/switch variant carrying the checked flag.
pub fn set_checkbox<T, W, F>(
    link: &Scope<AdminDashboard>,
    wrap: W,
    value: &T,
    apply: F,
) -> Callback<Event>
where
    T: Clone + 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
    F: Fn(&mut T, bool) + 'static,
{
    let value = value.clone();
    link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut value = value.clone();
        apply(&mut value, input.checked());
        Msg::Edit(wrap(DraftAction::Set(value)))
    })
}

/// Variant for callbacks that already carry a typed value (upload fields,
/// tag lists).
pub fn set_with<T, V, W, F>(
    link: &Scope<AdminDashboard>,
    wrap: W,
    value: &T,
    apply: F,
) -> Callback<V>
where
    T: Clone + 'static,
    V: 'static,
    W: Fn(DraftAction<T>) -> EditMsg + 'static,
    F: Fn(&mut T, V) + 'static,
{
    let value = value.clone();
    link.callback(move |incoming: V| {
        let mut value = value.clone();
        apply(&mut value, incoming);
        Msg::Edit(wrap(DraftAction::Set(value)))
    })
}
