use yew::prelude::*;

/// The five views of the console. Switching between them never refetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Players,
    Teams,
    Schedule,
    News,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Players, Tab::Teams, Tab::Schedule, Tab::News];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Players => "Players",
            Tab::Teams => "Teams",
            Tab::Schedule => "Schedule",
            Tab::News => "News",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Players => "👥",
            Tab::Teams => "⚽",
            Tab::Schedule => "📅",
            Tab::News => "📰",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_mobile_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_| {
            is_mobile_menu_open.set(!*is_mobile_menu_open);
        })
    };

    let tab_button = |tab: Tab, close_menu: bool| {
        let on_select = props.on_select.clone();
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if close_menu {
                is_mobile_menu_open.set(false);
            }
            on_select.emit(tab);
        });
        html! {
            <button
                key={tab.label()}
                {onclick}
                class={classes!(
                    "px-4", "py-2", "rounded-lg", "flex", "items-center", "space-x-2",
                    "transition-all", "min-h-[44px]",
                    if props.active == tab {
                        classes!("bg-blue-600", "text-white", "shadow-lg")
                    } else {
                        classes!("text-gray-600", "hover:bg-blue-50", "hover:text-blue-600")
                    }
                )}
            >
                <span>{tab.icon()}</span>
                <span class="font-medium">{tab.label()}</span>
            </button>
        }
    };

    html! {
        <nav class={classes!("sticky", "top-0", "z-50", "bg-white", "shadow-lg", "border-b-4", "border-blue-600")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4")}>
                <div class={classes!("flex", "justify-between", "items-center", "h-16")}>
                    <div class={classes!("flex", "items-center", "space-x-3")}>
                        <div class="text-2xl">{"⚽"}</div>
                        <div>
                            <h1 class="text-xl font-bold text-blue-800">{"BlueFire Soccer Club"}</h1>
                            <p class="text-xs text-gray-600">{"Youth Development Program"}</p>
                        </div>
                    </div>

                    // Desktop navigation - hidden on mobile
                    <div class={classes!("hidden", "md:flex", "space-x-1")}>
                        { for Tab::ALL.iter().map(|tab| tab_button(*tab, false)) }
                    </div>

                    <button
                        onclick={toggle_mobile_menu}
                        class={classes!("md:hidden", "p-2", "rounded-md", "text-gray-600", "hover:bg-blue-50")}
                        aria-label="Toggle navigation"
                    >
                        {if *is_mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>

                if *is_mobile_menu_open {
                    <div class={classes!("md:hidden", "pb-4", "flex", "flex-col", "space-y-1")}>
                        { for Tab::ALL.iter().map(|tab| tab_button(*tab, true)) }
                    </div>
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_tabs_are_distinct() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in Tab::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
