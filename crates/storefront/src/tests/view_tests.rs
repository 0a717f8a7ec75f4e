use cart::Cart;

use super::*;

fn plant(id: &str, price: f64) -> Plant {
    Plant {
        id: PlantId::from(id),
        name: format!("Plant {id}"),
        image: format!("https://img.example/{id}.png"),
        price,
        description: "A hardy plant for sunny yards.".to_string(),
        category: "Shade Tree".to_string(),
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::all(),
            label: "All Trees".to_string(),
        },
        Category {
            id: CategoryId::from("1"),
            label: "Fruit Tree".to_string(),
        },
        Category {
            id: CategoryId::from("2"),
            label: "Flowering Tree".to_string(),
        },
    ]
}

#[test]
fn exactly_one_category_is_active() {
    let strip = category_strip(&categories(), &CategoryId::from("2"));
    let active: Vec<&str> = strip
        .iter()
        .filter(|button| button.active)
        .map(|button| button.id.as_str())
        .collect();
    assert_eq!(active, vec!["2"]);
}

#[test]
fn category_strip_is_idempotent() {
    let first = category_strip(&categories(), &CategoryId::all());
    let second = category_strip(&categories(), &CategoryId::all());
    assert_eq!(first, second);
    assert!(first[0].active);
}

#[test]
fn empty_plant_list_renders_single_placeholder() {
    let grid = plant_grid(&[]);
    let placeholders = grid
        .iter()
        .filter(|element| matches!(element, GridElement::Placeholder { .. }))
        .count();
    let cards = grid
        .iter()
        .filter(|element| matches!(element, GridElement::Card(_)))
        .count();
    assert_eq!(placeholders, 1);
    assert_eq!(cards, 0);
}

#[test]
fn plants_render_as_cards_in_order() {
    let grid = plant_grid(&[plant("a", 120.0), plant("b", 75.4)]);
    assert_eq!(grid.len(), 2);
    match &grid[1] {
        GridElement::Card(card) => {
            assert_eq!(card.id.as_str(), "b");
            assert_eq!(card.price_label, "৳75");
        }
        other => panic!("unexpected element: {other:?}"),
    }
}

#[test]
fn long_descriptions_are_shortened_on_cards() {
    let mut long = plant("a", 1.0);
    long.description = "x".repeat(200);
    let grid = plant_grid(&[long]);
    let GridElement::Card(card) = &grid[0] else {
        panic!("expected card");
    };
    assert_eq!(card.excerpt.chars().count(), CARD_EXCERPT_CHARS + 1);
    assert!(card.excerpt.ends_with('…'));
}

#[test]
fn detail_panel_for_known_and_unknown_ids() {
    let plants = vec![plant("a", 120.0)];
    let panel = detail_panel(&plants, &PlantId::from("a")).expect("panel");
    assert_eq!(panel.name, "Plant a");
    assert_eq!(panel.price_label, "৳120");

    assert!(detail_panel(&plants, &PlantId::from("zzz")).is_none());
}

#[test]
fn cart_panel_lists_groups_total_and_badge() {
    let mut cart = Cart::new();
    cart.add(plant("a", 100.0));
    cart.add(plant("b", 250.0));
    cart.add(plant("a", 100.0));

    let panel = cart_panel(&cart.summarize());
    assert_eq!(panel.badge, "3");
    assert_eq!(panel.total_label, "৳450");
    assert_eq!(panel.lines.len(), 2);
    assert_eq!(panel.lines[0].qty, 2);
    assert_eq!(panel.lines[0].unit_price_label, "৳100");
    assert_eq!(panel.lines[0].line_total_label, "৳200");
}

#[test]
fn empty_cart_panel() {
    let panel = cart_panel(&Cart::new().summarize());
    assert!(panel.is_empty());
    assert_eq!(panel.badge, "0");
    assert_eq!(panel.total_label, "৳0");
}

#[test]
fn currency_rounds_to_whole_units() {
    assert_eq!(format_currency(12.9), "৳13");
    assert_eq!(format_currency(f64::NAN), "৳0");
}
