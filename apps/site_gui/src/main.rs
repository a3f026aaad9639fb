//! Single-page site demo driven by the navigation controller.
//!
//! The window plays the role of the markup: it creates the page, link, and
//! menu elements in a [`MemoryDom`], hands the bindings to a
//! [`NavController`], and renders purely from the classes the controller
//! toggled. Nothing here decides what is visible; it only reads back the
//! `active`/`hidden` classes and forwards clicks.

mod config;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use nav_core::{
    Dom, LinkBinding, MemoryDom, MenuBindings, NavController, PageBinding, ACTIVE_CLASS,
    HIDDEN_CLASS,
};
use shared::domain::{ElementId, HashTarget, PageId};
use tracing::info;

use crate::config::SiteManifest;

/// Below this window width the inline nav collapses into the hamburger menu.
const NARROW_LAYOUT_MAX_WIDTH: f32 = 640.0;

#[derive(Debug, Parser)]
#[command(name = "site_gui", about = "Hash-routed single-page site demo")]
struct Args {
    /// TOML site manifest; defaults to SITE_MANIFEST, ./site.toml, then the built-in site.
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Initial location hash, e.g. `#about`.
    #[arg(long)]
    initial_hash: Option<String>,
}

struct PageView {
    page_id: PageId,
    label: String,
    body: String,
    section: ElementId,
    link: ElementId,
}

struct SiteApp {
    dom: MemoryDom,
    controller: NavController,
    site_title: String,
    pages: Vec<PageView>,
    menu: MenuBindings,
}

impl SiteApp {
    fn new(manifest: SiteManifest, initial_hash: Option<HashTarget>) -> anyhow::Result<Self> {
        let mut dom = MemoryDom::with_initial_hash(initial_hash);

        let mut pages = Vec::new();
        for section in &manifest.pages {
            pages.push(PageView {
                page_id: PageId::new(section.id.clone()),
                label: section.label.clone(),
                body: section.body.clone(),
                section: dom.create_element(),
                link: dom.create_element(),
            });
        }
        let menu = MenuBindings {
            container: dom.create_element(),
            open_icon: dom.create_element(),
            close_icon: dom.create_element(),
        };

        let mut controller = NavController::new(
            pages
                .iter()
                .map(|page| PageBinding {
                    page_id: page.page_id.clone(),
                    element: page.section,
                })
                .collect(),
            pages
                .iter()
                .map(|page| LinkBinding {
                    href: HashTarget::for_page(&page.page_id),
                    element: page.link,
                })
                .collect(),
            menu,
            manifest.default_page_id(),
        )
        .context("site manifest violates the navigation structural contract")?;
        controller.init(&mut dom);

        Ok(Self {
            dom,
            controller,
            site_title: manifest.title,
            pages,
            menu,
        })
    }

    fn menu_visible(&self) -> bool {
        !self.dom.has_class(self.menu.container, HIDDEN_CLASS)
    }

    fn open_icon_visible(&self) -> bool {
        !self.dom.has_class(self.menu.open_icon, HIDDEN_CLASS)
    }

    fn click_link(&mut self, index: usize) {
        let href = HashTarget::for_page(&self.pages[index].page_id);
        self.controller.handle_link_click(&mut self.dom, &href);
    }

    fn show_header(&mut self, ctx: &egui::Context, narrow: bool) {
        let mut clicked = None;
        let mut toggle = false;

        egui::TopBottomPanel::top("site_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.site_title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if narrow {
                        let icon = if self.open_icon_visible() { "☰" } else { "✕" };
                        if ui.button(icon).clicked() {
                            toggle = true;
                        }
                    } else {
                        for (index, page) in self.pages.iter().enumerate().rev() {
                            let active = self.dom.has_class(page.link, ACTIVE_CLASS);
                            if ui.selectable_label(active, &page.label).clicked() {
                                clicked = Some(index);
                            }
                        }
                    }
                });
            });
        });

        // The expanded mobile menu sits directly under the header.
        if narrow && self.menu_visible() {
            egui::TopBottomPanel::top("mobile_menu").show(ctx, |ui| {
                ui.vertical(|ui| {
                    for (index, page) in self.pages.iter().enumerate() {
                        let active = self.dom.has_class(page.link, ACTIVE_CLASS);
                        if ui.selectable_label(active, &page.label).clicked() {
                            clicked = Some(index);
                        }
                    }
                });
            });
        }

        if toggle {
            self.controller.toggle_menu(&mut self.dom);
        }
        if let Some(index) = clicked {
            self.click_link(index);
        }
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        let mut back = false;
        let mut forward = false;

        egui::TopBottomPanel::bottom("site_footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                back = ui
                    .add_enabled(self.dom.can_go_back(), egui::Button::new("⏴ Back"))
                    .clicked();
                forward = ui
                    .add_enabled(self.dom.can_go_forward(), egui::Button::new("Forward ⏵"))
                    .clicked();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let hash = self
                        .dom
                        .current_hash()
                        .map(|hash| hash.as_str().to_string())
                        .unwrap_or_else(|| "(no hash)".to_string());
                    ui.small(hash);
                });
            });
        });

        if back && self.dom.back() {
            self.controller.handle_popstate(&mut self.dom);
        }
        if forward && self.dom.forward() {
            self.controller.handle_popstate(&mut self.dom);
        }
    }

    fn show_pages(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let scroll_locked = self.dom.is_scroll_locked();
            egui::ScrollArea::vertical()
                .enable_scrolling(!scroll_locked)
                .show(ui, |ui| {
                    for page in &self.pages {
                        if !self.dom.has_class(page.section, ACTIVE_CLASS) {
                            continue;
                        }
                        ui.heading(&page.label);
                        ui.separator();
                        ui.label(&page.body);
                    }
                });
        });
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let narrow = ctx.screen_rect().width() < NARROW_LAYOUT_MAX_WIDTH;
        self.show_header(ctx, narrow);
        self.show_footer(ctx);
        self.show_pages(ctx);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let manifest = config::load_manifest(args.manifest.as_deref())?;
    let initial_hash = args
        .initial_hash
        .as_deref()
        .and_then(HashTarget::from_fragment);
    info!(
        title = %manifest.title,
        pages = manifest.pages.len(),
        "loaded site manifest"
    );

    let title = manifest.title.clone();
    let app = SiteApp::new(manifest, initial_hash)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("failed to run the site window: {err}"))
}
