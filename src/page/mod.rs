//! Headless model of the host page: product cards in, sidebar regions out.

pub mod error;

pub use error::*;

use std::collections::HashMap;

use crate::domain::Product;

pub const CART_TITLE_ID: &str = "cart-title";
pub const CART_ITEMS_ID: &str = "cart-items";
pub const CART_TOTAL_ID: &str = "cart-total";

/// Index of a product card's control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlHandle(pub usize);

/// Ordered CSS class list of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::default();
        list.add(classes.split_whitespace());
        list
    }

    pub fn add<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        for class in classes {
            if !self.contains(class) {
                self.0.push(class.to_string());
            }
        }
    }

    pub fn remove<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        for class in classes {
            self.0.retain(|c| c != class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn as_attr(&self) -> String {
        self.0.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonElement {
    pub classes: ClassList,
    pub inner_html: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub src: String,
    pub classes: ClassList,
}

/// One `.product-card`: the product it advertises, its add button and image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub product: Product,
    pub button: ButtonElement,
    pub image: ImageElement,
}

impl ProductCard {
    /// Builds a card from its `data-name` / `data-price` attributes.
    ///
    /// The button starts out blank; the binder paints it on bind.
    pub fn from_attributes(name: &str, price: &str) -> Result<Self, MarkupError> {
        let invalid = || MarkupError::InvalidPrice {
            name: name.to_string(),
            raw: price.to_string(),
        };
        let price: f64 = price.trim().parse().map_err(|_| invalid())?;
        if !price.is_finite() || price < 0.0 {
            return Err(invalid());
        }

        Ok(Self {
            product: Product::new(name, price),
            button: ButtonElement {
                classes: ClassList::parse("add-to-cart-button"),
                inner_html: String::new(),
            },
            image: ImageElement {
                src: format!("assets/{}.jpg", slug(name)),
                classes: ClassList::parse("w-full rounded-lg"),
            },
        })
    }
}

/// A sidebar display region, written by replacing its content wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub text: String,
    pub children: Vec<String>,
}

/// The host page the widget is mounted on.
#[derive(Debug, Clone)]
pub struct Page {
    cards: Vec<ProductCard>,
    regions: HashMap<String, Region>,
}

impl Page {
    /// A page with the standard cart sidebar.
    pub fn with_cart_sidebar(cards: Vec<ProductCard>) -> Result<Self, MarkupError> {
        Self::new(cards, &[CART_TITLE_ID, CART_ITEMS_ID, CART_TOTAL_ID])
    }

    /// A page exposing only the given region ids.
    pub fn new(cards: Vec<ProductCard>, region_ids: &[&str]) -> Result<Self, MarkupError> {
        for (index, card) in cards.iter().enumerate() {
            let name = &card.product.name;
            if cards[..index].iter().any(|c| &c.product.name == name) {
                return Err(MarkupError::DuplicateProduct(name.clone()));
            }
        }

        let regions = region_ids
            .iter()
            .map(|id| (id.to_string(), Region::default()))
            .collect();
        Ok(Self { cards, regions })
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn card(&self, handle: ControlHandle) -> Option<&ProductCard> {
        self.cards.get(handle.0)
    }

    pub fn card_mut(&mut self, handle: ControlHandle) -> Option<&mut ProductCard> {
        self.cards.get_mut(handle.0)
    }

    #[allow(dead_code)]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), PageError> {
        let region = self.region_mut(id)?;
        region.text = text.into();
        Ok(())
    }

    /// Clears the region and appends `children` in order.
    pub fn replace_children(&mut self, id: &str, children: Vec<String>) -> Result<(), PageError> {
        let region = self.region_mut(id)?;
        region.children = children;
        Ok(())
    }

    fn region_mut(&mut self, id: &str) -> Result<&mut Region, PageError> {
        self.regions
            .get_mut(id)
            .ok_or_else(|| PageError::MissingRegion(id.to_string()))
    }
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
