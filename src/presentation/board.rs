use leptos::*;

use crate::application::BoardState;
use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::{Asset, CategoryFilter, ChangeTone, format_change, format_number},
};

/// Board section: filter bar, asset table and chart panel sharing one [`BoardState`].
#[component]
pub fn MarketBoard(board: RwSignal<BoardState>) -> impl IntoView {
    view! {
        <section id="board" class="board-section reveal">
            <div class="section-heading">
                <h2>"Board marchés"</h2>
                <p class="section-sub">"Données pédagogiques figées, pas de flux temps réel."</p>
            </div>
            <FilterBar board=board />
            <div class="board-layout">
                <BoardTable board=board />
                <ChartPanel board=board />
            </div>
        </section>
    }
}

#[component]
fn FilterBar(board: RwSignal<BoardState>) -> impl IntoView {
    let active = create_memo(move |_| board.with(BoardState::filter));

    let buttons = CategoryFilter::choices()
        .map(|filter| {
            let on_click = move |_: ev::MouseEvent| {
                let outcome = board.try_update(|state| state.set_filter(filter));
                get_logger().debug(
                    LogComponent::Presentation("FilterBar"),
                    &format!("Filter '{}' applied: {:?}", filter.key(), outcome),
                );
            };
            view! {
                <button
                    type="button"
                    class="filter-btn"
                    class:active=move || active.get() == filter
                    data-filter=filter.key()
                    on:click=on_click
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="filter-bar">{buttons}</div> }
}

/// Rows are rebuilt from scratch whenever the visible set changes.
#[component]
fn BoardTable(board: RwSignal<BoardState>) -> impl IntoView {
    let visible = create_memo(move |_| {
        board.with(|state| state.visible_assets().collect::<Vec<&'static Asset>>())
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|asset| view! { <BoardRow asset=asset board=board /> })
            .collect_view()
    };

    view! { <div id="markets-table" class="markets-table">{rows}</div> }
}

#[component]
fn BoardRow(asset: &'static Asset, board: RwSignal<BoardState>) -> impl IntoView {
    let id = asset.id;
    let change_class = format!("table-change {}", ChangeTone::of(asset.change_pct).css_class());

    view! {
        <button
            type="button"
            class="table-row"
            data-asset-id=id.as_str()
            on:click=move |_| board.update(|state| {
                state.select_asset(id.as_str());
            })
        >
            <div>
                <span class="table-name-main">{asset.name}</span>
                <span class="table-name-sub">{asset.label}</span>
            </div>
            <div class="table-value">{format_number(asset.value)}</div>
            <div class=change_class>{format_change(asset.change_pct)}</div>
        </button>
    }
}

#[component]
fn ChartPanel(board: RwSignal<BoardState>) -> impl IntoView {
    let chart = create_memo(move |_| board.with(BoardState::chart_view));

    let bars = move || {
        chart.with(|panel| {
            panel.bars
                .iter()
                .map(|bar| view! { <div class="chart-bar" style:transform=bar.css_transform()></div> })
                .collect_view()
        })
    };

    let tags = move || {
        chart.with(|panel| {
            panel.tags
                .iter()
                .map(|tag| view! { <span class="chart-tag">{*tag}</span> })
                .collect_view()
        })
    };

    view! {
        <div class="chart-panel">
            <div class="chart-header">
                <h3 id="chart-title" class="chart-title">{move || chart.with(|panel| panel.title)}</h3>
                <span id="chart-ticker" class="chart-ticker">{move || chart.with(|panel| panel.ticker)}</span>
            </div>
            <div id="chart-canvas" class="chart-canvas">{bars}</div>
            <p id="chart-comment" class="chart-comment">{move || chart.with(|panel| panel.comment)}</p>
            <div id="chart-tags" class="chart-tags">{tags}</div>
        </div>
    }
}
