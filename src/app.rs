use leptos::*;

use crate::{
    application::BoardState,
    domain::{config::SiteConfig, market_data::catalog::ASSETS},
    presentation::{ChatWidget, FaqWidget, Hero, MarketBoard, NavBar, WorkshopCarousel},
};

/// 🦀 Root component of the FEIS page
#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let board = create_rw_signal(BoardState::new(ASSETS, &config.default_asset, config.bar_floor));

    view! {
        <style>
            {r#"
            .feis-site {
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #0b1320;
                color: #e8edf5;
                min-height: 100vh;
            }

            .nav-bar {
                position: sticky;
                top: 0;
                z-index: 10;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 14px 32px;
                background: rgba(11, 19, 32, 0.9);
                backdrop-filter: blur(8px);
                border-bottom: 1px solid #1f2b3d;
            }

            .nav-brand {
                font-weight: 800;
                letter-spacing: 0.12em;
                color: #72c685;
            }

            .nav-link, .cta, .filter-btn, .faq-chip, .chat-send {
                background: transparent;
                color: inherit;
                border: 1px solid #2c3c55;
                border-radius: 999px;
                padding: 6px 14px;
                margin-left: 6px;
                cursor: pointer;
                font: inherit;
            }

            .nav-link:hover, .cta:hover, .filter-btn:hover, .faq-chip:hover {
                border-color: #72c685;
            }

            .cta.primary, .filter-btn.active, .chat-send {
                background: #72c685;
                border-color: #72c685;
                color: #0b1320;
            }

            main {
                max-width: 1080px;
                margin: 0 auto;
                padding: 0 24px 64px;
            }

            .hero {
                max-width: 1080px;
                margin: 0 auto;
                padding: 72px 24px 48px;
            }

            .hero h1 {
                font-size: 40px;
                margin: 8px 0 16px;
            }

            .hero-kicker, .section-sub, .table-name-sub, .chart-ticker, .workshop-tag {
                color: #8a9ab3;
                font-size: 13px;
            }

            .section-heading {
                margin: 56px 0 16px;
            }

            .filter-bar {
                display: flex;
                gap: 4px;
                margin-bottom: 16px;
            }

            .board-layout {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 20px;
            }

            .markets-table {
                display: flex;
                flex-direction: column;
                gap: 6px;
            }

            .table-row {
                display: grid;
                grid-template-columns: 2fr 1fr 1fr;
                align-items: center;
                text-align: left;
                padding: 10px 14px;
                background: #121d2e;
                color: inherit;
                border: 1px solid #1f2b3d;
                border-radius: 10px;
                cursor: pointer;
                font: inherit;
            }

            .table-name-main {
                display: block;
                font-weight: 600;
            }

            .table-value, .table-change {
                text-align: right;
                font-family: 'Courier New', monospace;
            }

            .table-change.pos { color: #72c685; }
            .table-change.neg { color: #e36b6b; }

            .chart-panel {
                background: #121d2e;
                border: 1px solid #1f2b3d;
                border-radius: 12px;
                padding: 18px;
            }

            .chart-header {
                display: flex;
                justify-content: space-between;
                align-items: baseline;
            }

            .chart-canvas {
                display: flex;
                align-items: flex-end;
                gap: 6px;
                height: 160px;
                margin: 16px 0;
            }

            .chart-bar {
                flex: 1;
                height: 100%;
                background: linear-gradient(180deg, #72c685 0%, #2a5298 100%);
                border-radius: 4px 4px 0 0;
                transform-origin: bottom;
                transition: transform 0.3s ease;
            }

            .chart-tags {
                display: flex;
                flex-wrap: wrap;
                gap: 6px;
            }

            .chart-tag {
                font-size: 12px;
                padding: 3px 10px;
                border-radius: 999px;
                background: #1f2b3d;
            }

            .chat-log {
                height: 280px;
                overflow-y: auto;
                padding: 12px;
                background: #121d2e;
                border: 1px solid #1f2b3d;
                border-radius: 12px;
            }

            .chat-message {
                display: flex;
                margin: 6px 0;
            }

            .chat-message.user { justify-content: flex-end; }

            .chat-bubble {
                max-width: 75%;
                padding: 8px 12px;
                border-radius: 12px;
                line-height: 1.45;
                background: #1f2b3d;
            }

            .chat-message.user .chat-bubble {
                background: #2a5298;
            }

            .chat-form {
                display: flex;
                gap: 8px;
                margin-top: 10px;
            }

            .chat-input {
                flex: 1;
                padding: 8px 12px;
                border-radius: 999px;
                border: 1px solid #2c3c55;
                background: #0b1320;
                color: inherit;
                font: inherit;
            }

            .faq-chips {
                display: flex;
                flex-wrap: wrap;
                gap: 6px;
                margin-bottom: 14px;
            }

            .faq-answer {
                padding: 16px;
                background: #121d2e;
                border: 1px solid #1f2b3d;
                border-radius: 12px;
                line-height: 1.5;
            }

            .workshop-carousel {
                display: flex;
                gap: 16px;
                overflow-x: auto;
                scroll-snap-type: x mandatory;
                padding-bottom: 8px;
            }

            .workshop-card {
                flex: 0 0 260px;
                scroll-snap-align: start;
                padding: 18px;
                background: #121d2e;
                border: 1px solid #1f2b3d;
                border-radius: 12px;
            }

            .workshop-title {
                font-weight: 700;
            }

            .reveal {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }

            .reveal.visible {
                opacity: 1;
                transform: none;
            }

            .site-footer {
                text-align: center;
                padding: 24px;
                color: #8a9ab3;
                font-size: 12px;
            }

            @media (max-width: 760px) {
                .board-layout { grid-template-columns: 1fr; }
            }
            "#}
        </style>
        <div class="feis-site">
            <NavBar offset_px=config.scroll_offset_px />
            <Hero offset_px=config.scroll_offset_px />
            <main>
                <MarketBoard board=board />
                <ChatWidget reply_delay=config.chat_reply_delay() />
                <FaqWidget />
                <WorkshopCarousel />
            </main>
            <footer class="site-footer">
                "Contenu pédagogique, aucune recommandation d’investissement."
            </footer>
        </div>
    }
}
