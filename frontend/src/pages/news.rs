use chrono::Local;
use shared::NewsDto;
use yew::prelude::*;

use crate::resolvers::format_news_date;

#[derive(Properties, PartialEq)]
pub struct NewsProps {
    pub news: Vec<NewsDto>,
}

#[function_component(News)]
pub fn news(props: &NewsProps) -> Html {
    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl p-8 shadow-lg">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">{"Club News & Announcements"}</h2>

                if props.news.is_empty() {
                    <div class="text-center py-8">
                        <div class="text-4xl mb-4">{"📰"}</div>
                        <p class="text-gray-600">{"No news posted yet."}</p>
                    </div>
                } else {
                    <div class="space-y-6">
                        { for props.news.iter().map(news_item) }
                    </div>
                }
            </div>
        </div>
    }
}

fn news_item(item: &NewsDto) -> Html {
    html! {
        <article
            key={item.id.clone()}
            class={classes!(
                "border", "rounded-xl", "p-6",
                if item.important { classes!("border-yellow-200", "bg-yellow-50") } else { classes!("border-gray-200") }
            )}
        >
            <div class="flex items-start justify-between mb-4">
                <div class="flex-1">
                    <h3 class="text-xl font-bold text-gray-800 mb-2">
                        if item.important {
                            <span class="text-yellow-600 mr-2">{"⭐"}</span>
                        }
                        {item.title.clone()}
                    </h3>
                    <div class="text-sm text-gray-500">
                        {format!("By {} • {}", item.author, format_news_date(&item.created_at.with_timezone(&Local)))}
                    </div>
                </div>
                if item.important {
                    <span class="bg-yellow-100 text-yellow-800 px-3 py-1 rounded-full text-xs font-semibold">
                        {"Important"}
                    </span>
                }
            </div>
            <div class="text-gray-700 whitespace-pre-wrap">
                {item.content.clone()}
            </div>
        </article>
    }
}
