//! Static menu catalog
//!
//! The read-only source of truth for names, prices, images, and allergens.
//! Built once at first access and never mutated at runtime; pages select
//! from here, the cart captures from here.

use rust_decimal::Decimal;
use shared::{MenuCategory, MenuItem};
use std::sync::LazyLock;

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: u32,
    image: &str,
    allergenes: &[&str],
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        allergenes: (!allergenes.is_empty())
            .then(|| allergenes.iter().map(ToString::to_string).collect()),
        image: Some(image.to_string()),
        featured: false,
        ingredients: None,
        preparation: None,
    }
}

fn featured(base: MenuItem, ingredients: &[&str], preparation: &str) -> MenuItem {
    MenuItem {
        featured: true,
        ingredients: Some(ingredients.iter().map(ToString::to_string).collect()),
        preparation: Some(preparation.to_string()),
        ..base
    }
}

static FOOD: LazyLock<Vec<MenuCategory>> = LazyLock::new(|| {
    vec![
        MenuCategory {
            name: "Starters".to_string(),
            items: vec![
                item(
                    "f1",
                    "Truffle Arancini",
                    "Crispy risotto balls with black truffle and mozzarella",
                    12,
                    "https://images.unsplash.com/photo-1597289124948-688c1a35cb48?q=80&w=800",
                    &["gluten", "dairy"],
                ),
                featured(
                    item(
                        "f2",
                        "Heirloom Tomato Salad",
                        "Fresh tomatoes, buffalo mozzarella, basil, aged balsamic",
                        14,
                        "https://images.unsplash.com/photo-1590005024862-6b67679a29fb?q=80&w=800",
                        &["dairy"],
                    ),
                    &[
                        "Heirloom tomatoes",
                        "Buffalo mozzarella",
                        "Fresh basil",
                        "Extra virgin olive oil",
                        "Aged balsamic vinegar",
                        "Sea salt",
                        "Black pepper",
                    ],
                    "Our chef carefully selects the ripest heirloom tomatoes from local organic \
                     farms. The tomatoes are sliced and arranged with torn buffalo mozzarella, \
                     then garnished with fresh basil leaves. The dish is finished with a drizzle \
                     of our imported extra virgin olive oil and 25-year aged balsamic vinegar \
                     from Modena, Italy.",
                ),
                item(
                    "f3",
                    "Beef Carpaccio",
                    "Thinly sliced raw beef, truffle aioli, arugula, parmesan",
                    16,
                    "https://images.unsplash.com/photo-1625944525533-473f1a3d54e7?q=80&w=800",
                    &["dairy", "eggs"],
                ),
            ],
        },
        MenuCategory {
            name: "Main Courses".to_string(),
            items: vec![
                featured(
                    item(
                        "f4",
                        "Pan-Seared Scallops",
                        "Cauliflower purée, crispy pancetta, brown butter sauce",
                        34,
                        "https://images.unsplash.com/photo-1572441536343-446b9b99adde?q=80&w=2145",
                        &["shellfish", "dairy"],
                    ),
                    &[
                        "Jumbo sea scallops",
                        "Cauliflower",
                        "Pancetta",
                        "Butter",
                        "Lemon",
                        "Chives",
                        "Microgreens",
                    ],
                    "Our chef sources the freshest jumbo sea scallops daily. They are seasoned \
                     and seared to perfection in a cast iron pan. The scallops are served on a \
                     bed of silky cauliflower purée, topped with crispy pancetta bits, and \
                     finished with a brown butter sauce infused with lemon. The dish is \
                     garnished with fresh chives and delicate microgreens.",
                ),
                item(
                    "f5",
                    "Truffle Risotto",
                    "Arborio rice, porcini mushrooms, black truffle, parmesan",
                    28,
                    "https://images.unsplash.com/photo-1633964913295-ceb43826e7c9?q=80&w=2070",
                    &["dairy"],
                ),
                item(
                    "f6",
                    "Aged Ribeye Steak",
                    "28-day dry-aged beef, potato gratin, roasted vegetables",
                    42,
                    "https://images.unsplash.com/photo-1600891964092-4316c288032e?q=80&w=800",
                    &["dairy"],
                ),
            ],
        },
        MenuCategory {
            name: "Chef's Specials".to_string(),
            items: vec![
                item(
                    "f7",
                    "Lobster Linguine",
                    "Fresh pasta, whole lobster, cherry tomatoes, white wine sauce",
                    38,
                    "https://images.unsplash.com/photo-1551782450-17144efb9c50?q=80&w=800",
                    &["gluten", "shellfish"],
                ),
                featured(
                    item(
                        "f8",
                        "Lamb Rack",
                        "Herb-crusted lamb, mint pea purée, roasted root vegetables",
                        36,
                        "https://images.unsplash.com/photo-1619711700868-0fff3de51caf?q=80&w=2069",
                        &["dairy"],
                    ),
                    &[
                        "New Zealand lamb rack",
                        "Fresh herbs (rosemary, thyme, mint)",
                        "Dijon mustard",
                        "Breadcrumbs",
                        "Green peas",
                        "Root vegetables",
                        "Lamb jus",
                    ],
                    "Our chef prepares a premium New Zealand lamb rack, coated with Dijon \
                     mustard and a crust of fresh herbs and breadcrumbs. The lamb is roasted to \
                     a perfect medium-rare. It's served with a smooth mint pea purée and a \
                     medley of roasted root vegetables. The dish is finished with a rich lamb \
                     jus reduction that's been simmering for 12 hours.",
                ),
            ],
        },
    ]
});

static DESSERTS: LazyLock<Vec<MenuCategory>> = LazyLock::new(|| {
    vec![MenuCategory {
        name: "Desserts".to_string(),
        items: vec![
            item(
                "d1",
                "Chocolate Soufflé",
                "Warm chocolate soufflé with vanilla ice cream",
                12,
                "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?q=80&w=800",
                &["gluten", "dairy", "eggs"],
            ),
            item(
                "d2",
                "Crème Brûlée",
                "Classic vanilla custard with caramelized sugar top",
                10,
                "https://images.unsplash.com/photo-1676300184943-09b2a08319a3?q=80&w=2070",
                &["dairy", "eggs"],
            ),
            item(
                "d3",
                "Berry Panna Cotta",
                "Vanilla panna cotta with fresh berries and mint",
                11,
                "https://images.unsplash.com/photo-1488477181946-6428a0291777?q=80&w=800",
                &["dairy"],
            ),
        ],
    }]
});

static DRINKS: LazyLock<Vec<MenuCategory>> = LazyLock::new(|| {
    vec![
        MenuCategory {
            name: "Wine".to_string(),
            items: vec![
                item(
                    "w1",
                    "Château Margaux 2015",
                    "Premier Grand Cru Classé, Margaux, Bordeaux, France",
                    220,
                    "https://images.unsplash.com/photo-1646216204447-74c4fee47c08?q=80&w=1974",
                    &[],
                ),
                item(
                    "w2",
                    "Opus One 2018",
                    "Cabernet Blend, Napa Valley, California",
                    180,
                    "https://images.unsplash.com/photo-1584916201218-f4242ceb4809?q=80&w=800",
                    &[],
                ),
                item(
                    "w3",
                    "Dom Pérignon 2012",
                    "Champagne, France",
                    195,
                    "https://images.unsplash.com/photo-1581775120934-9851ea6cf3e4?q=80&w=1974",
                    &[],
                ),
            ],
        },
        MenuCategory {
            name: "Cocktails".to_string(),
            items: vec![
                item(
                    "c1",
                    "Signature Negroni",
                    "Aged gin, Campari, house-made vermouth blend",
                    16,
                    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?q=80&w=800",
                    &[],
                ),
                item(
                    "c2",
                    "Truffle Old Fashioned",
                    "Bourbon infused with black truffle, bitters, maple",
                    18,
                    "https://images.unsplash.com/photo-1470337458703-46ad1756a187?q=80&w=800",
                    &[],
                ),
                item(
                    "c3",
                    "Elderflower Spritz",
                    "St-Germain, prosecco, soda, fresh mint",
                    14,
                    "https://images.unsplash.com/photo-1570598912132-0ba1dc952b7d?q=80&w=1974",
                    &[],
                ),
            ],
        },
        MenuCategory {
            name: "Non-Alcoholic".to_string(),
            items: vec![
                item(
                    "n1",
                    "Cucumber Mint Refresher",
                    "Fresh cucumber, mint, lime, sparkling water",
                    8,
                    "https://images.unsplash.com/photo-1733267445111-6b74319ef50a?q=80&w=2064",
                    &[],
                ),
                item(
                    "n2",
                    "Berry Hibiscus Lemonade",
                    "House-made hibiscus syrup, mixed berries, fresh lemon",
                    8,
                    "https://images.unsplash.com/photo-1606943932434-2f21e1c54ef2?q=80&w=800",
                    &[],
                ),
            ],
        },
    ]
});

/// Food categories: starters, mains, chef's specials
pub fn food_categories() -> &'static [MenuCategory] {
    &FOOD
}

/// Dessert categories
pub fn dessert_categories() -> &'static [MenuCategory] {
    &DESSERTS
}

/// Drink categories: wine, cocktails, non-alcoholic
pub fn drink_categories() -> &'static [MenuCategory] {
    &DRINKS
}

/// Every menu item across all categories, in menu order
pub fn all_items() -> impl Iterator<Item = &'static MenuItem> {
    food_categories()
        .iter()
        .chain(dessert_categories())
        .chain(drink_categories())
        .flat_map(|category| category.items.iter())
}

/// Items flagged for the featured section
pub fn featured_items() -> Vec<&'static MenuItem> {
    all_items().filter(|item| item.featured).collect()
}

/// Look up one item by id
pub fn find_item(id: &str) -> Option<&'static MenuItem> {
    all_items().find(|item| item.id == id)
}
