use leptos::*;

use crate::api::Trick;

#[component]
pub fn TrickCard(trick: Trick, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-4 flex flex-col gap-2">
            {trick
                .image_url
                .clone()
                .map(|url| view! { <img src=url alt=trick.name.clone() class="rounded-md object-cover h-40 w-full"/> })}
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-semibold text-fg">{trick.name.clone()}</h3>
                <span class="text-xs rounded-full px-2 py-1 bg-action-ghost-bg-hover text-fg-muted">
                    {trick.category.clone()}
                </span>
            </div>
            <p class="text-sm text-fg-muted">{trick.description.clone()}</p>
            {trick
                .technique
                .clone()
                .map(|technique| view! { <p class="text-xs text-fg-muted">"Техника: " {technique}</p> })}
            {trick
                .video_url
                .clone()
                .map(|url| view! { <a href=url target="_blank" class="text-xs text-action-primary-bg hover:underline">"Видео"</a> })}
            {children.map(|children| children())}
        </div>
    }
}
