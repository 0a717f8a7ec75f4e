use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::CategoryId;
use storefront::{
    view::{CartPanel, GridElement, PlantCard},
    Controller, SelectionOutcome,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiAction, UiError, UiErrorContext, UiEvent},
    orchestration::{dispatch_backend_command, request_plants},
};

const CARD_WIDTH: f32 = 230.0;
const CART_PANEL_WIDTH: f32 = 300.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(21, 128, 61);

pub struct StorefrontApp {
    controller: Controller,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
    status_banner: Option<UiError>,
}

impl StorefrontApp {
    pub fn new(
        controller: Controller,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let mut app = Self {
            controller,
            cmd_tx,
            ui_rx,
            status: "Loading catalog...".to_string(),
            status_banner: None,
        };
        dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadCategories, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CategoriesLoaded(raw) => {
                    self.controller.apply_categories(&raw);
                    self.select_category(CategoryId::all());
                }
                UiEvent::PlantsLoaded { token, result } => {
                    match self.controller.finish_select_category(token, result) {
                        Ok(SelectionOutcome::Applied) => {
                            self.status =
                                format!("{} plants", self.controller.state().plants.len());
                            self.status_banner = None;
                        }
                        Ok(SelectionOutcome::Stale) => {}
                        Err(err) => {
                            self.show_error(UiError::from_catalog(UiErrorContext::Plants, &err))
                        }
                    }
                }
                UiEvent::Error(err) => self.show_error(err),
            }
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::warn!(
            context = ?err.context(),
            category = ?err.category(),
            "{}",
            err.message()
        );
        self.status = err.banner_text();
        self.status_banner = Some(err);
    }

    fn select_category(&mut self, category_id: CategoryId) {
        request_plants(
            &mut self.controller,
            &self.cmd_tx,
            category_id,
            &mut self.status,
        );
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SelectCategory(category_id) => self.select_category(category_id),
            UiAction::AddToCart(plant_id) => {
                self.controller.add_to_cart(&plant_id);
            }
            UiAction::RemoveFromCart(plant_id) => {
                self.controller.remove_from_cart(&plant_id);
            }
            UiAction::OpenDetail(plant_id) => {
                self.controller.open_detail(&plant_id);
            }
            UiAction::CloseDetail => self.controller.close_detail(),
            UiAction::SubmitPledge => {
                let notice = self.controller.submit_pledge();
                self.status = notice.message;
            }
            UiAction::DismissPledgeNotice => self.controller.dismiss_pledge_notice(),
            UiAction::DismissError => {
                self.status_banner = None;
                self.controller.dismiss_error();
            }
        }
    }

    fn show_top_bar(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let cart = self.controller.cart_panel();
        egui::TopBottomPanel::top("category_strip").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("Green Earth").color(ACCENT).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format!("Cart {}", cart.badge)).strong());
                    if self.controller.state().is_loading() {
                        ui.spinner();
                    }
                });
            });
            ui.horizontal_wrapped(|ui| {
                for button in self.controller.category_strip() {
                    if ui
                        .selectable_label(button.active, button.label.as_str())
                        .clicked()
                    {
                        actions.push(UiAction::SelectCategory(button.id));
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_cart_panel(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let cart = self.controller.cart_panel();
        egui::SidePanel::right("cart_panel")
            .default_width(CART_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.heading("Your Cart");
                ui.separator();
                show_cart_lines(ui, &cart, actions);
            });
    }

    fn show_pledge_panel(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let notice = self.controller.state().pledge_notice.clone();
        egui::TopBottomPanel::bottom("pledge_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Plant a tree pledge").strong());
            ui.horizontal_wrapped(|ui| {
                let form = self.controller.pledge_form_mut();
                ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Your name"));
                ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("Email"));
                ui.add(
                    egui::TextEdit::singleline(&mut form.count)
                        .hint_text("Trees")
                        .desired_width(60.0),
                );
                if ui.button("Pledge").clicked() {
                    actions.push(UiAction::SubmitPledge);
                }
            });
            if let Some(notice) = notice {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&notice.message).color(ACCENT));
                    if ui.small_button("OK").clicked() {
                        actions.push(UiAction::DismissPledgeNotice);
                    }
                });
            }
            ui.small(egui::RichText::new(&self.status).weak());
            ui.add_space(6.0);
        });
    }

    fn show_plant_grid(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(banner) = &self.status_banner {
                show_status_banner(ui, banner, actions);
                ui.add_space(8.0);
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for element in self.controller.plant_grid() {
                        match element {
                            GridElement::Card(card) => show_plant_card(ui, &card, actions),
                            GridElement::Placeholder { message } => {
                                ui.label(egui::RichText::new(message).italics().weak());
                            }
                        }
                    }
                });
            });
        });
    }

    fn show_detail_window(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(panel) = self.controller.detail_panel() else {
            return;
        };

        let mut keep_open = true;
        egui::Window::new(panel.name.as_str())
            .id(egui::Id::new(("plant_detail", panel.id.as_str())))
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.hyperlink_to("View photo", &panel.image);
                ui.label(egui::RichText::new(&panel.category).weak());
                ui.add_space(4.0);
                ui.label(panel.description.as_str());
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&panel.price_label).strong());
                    if ui.button("Add to Cart").clicked() {
                        actions.push(UiAction::AddToCart(panel.id.clone()));
                    }
                });
            });

        if !keep_open {
            actions.push(UiAction::CloseDetail);
        }
    }
}

fn show_status_banner(ui: &mut egui::Ui, banner: &UiError, actions: &mut Vec<UiAction>) {
    egui::Frame::NONE
        .fill(egui::Color32::from_rgb(111, 53, 53))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(banner.banner_text()).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        actions.push(UiAction::DismissError);
                    }
                });
            });
        });
}

fn show_plant_card(ui: &mut egui::Ui, card: &PlantCard, actions: &mut Vec<UiAction>) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            if ui
                .link(egui::RichText::new(&card.name).strong().size(16.0))
                .clicked()
            {
                actions.push(UiAction::OpenDetail(card.id.clone()));
            }
            ui.label(card.excerpt.as_str());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&card.category).small().color(ACCENT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&card.price_label).strong());
                });
            });
            if ui
                .add_sized([CARD_WIDTH, 28.0], egui::Button::new("Add to Cart"))
                .clicked()
            {
                actions.push(UiAction::AddToCart(card.id.clone()));
            }
        });
}

fn show_cart_lines(ui: &mut egui::Ui, cart: &CartPanel, actions: &mut Vec<UiAction>) {
    if cart.is_empty() {
        ui.label(egui::RichText::new("Your cart is empty.").weak());
    }

    for line in &cart.lines {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&line.name).strong());
                ui.small(format!("{} x {}", line.unit_price_label, line.qty));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("x").on_hover_text("Remove").clicked() {
                    actions.push(UiAction::RemoveFromCart(line.id.clone()));
                }
                ui.label(line.line_total_label.as_str());
            });
        });
        ui.separator();
    }

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Total").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(&cart.total_label).strong());
        });
    });
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_top_bar(ctx, &mut actions);
        self.show_pledge_panel(ctx, &mut actions);
        self.show_cart_panel(ctx, &mut actions);
        self.show_plant_grid(ctx, &mut actions);
        self.show_detail_window(ctx, &mut actions);

        for action in actions {
            self.apply_action(action);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
