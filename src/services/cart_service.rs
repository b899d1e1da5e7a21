use crate::{
    audit::log_event,
    codec::StoreCodec,
    models::{Cart, CartItem, Product},
    storage::CART_KEY,
};

pub fn get_cart(codec: &StoreCodec) -> Cart {
    codec.load(CART_KEY, Cart::empty())
}

/// Adds `quantity` of a product, merging into an existing line when the
/// product id is already in the cart. The product is embedded as a full copy,
/// so the line keeps the price and description it had at add-time.
///
/// Quantity is not validated here; quantity selectors in the UI clamp to
/// `[1, product.quantity]` before calling in.
pub fn add_to_cart(codec: &StoreCodec, product: &Product, quantity: i32) -> Cart {
    let mut cart = get_cart(codec);

    match cart.items.iter_mut().find(|item| item.product.id == product.id) {
        Some(item) => item.quantity += quantity,
        None => cart.items.push(CartItem {
            product: product.clone(),
            quantity,
        }),
    }

    persist(codec, &mut cart);
    log_event(
        None,
        "cart_add",
        Some(serde_json::json!({ "product_id": product.id, "quantity": quantity })),
    );
    cart
}

/// Sets a line's quantity exactly (not incrementally). Zero or negative
/// delegates to remove; an unknown product id is a no-op.
pub fn update_cart_item_quantity(codec: &StoreCodec, product_id: &str, quantity: i32) -> Cart {
    if quantity <= 0 {
        return remove_from_cart(codec, product_id);
    }

    let mut cart = get_cart(codec);
    if let Some(item) = cart
        .items
        .iter_mut()
        .find(|item| item.product.id == product_id)
    {
        item.quantity = quantity;
        persist(codec, &mut cart);
        log_event(
            None,
            "cart_update",
            Some(serde_json::json!({ "product_id": product_id, "quantity": quantity })),
        );
    }
    cart
}

/// Removing an id that is not in the cart is a benign no-op.
pub fn remove_from_cart(codec: &StoreCodec, product_id: &str) -> Cart {
    let mut cart = get_cart(codec);
    let before = cart.items.len();
    cart.items.retain(|item| item.product.id != product_id);

    if cart.items.len() != before {
        persist(codec, &mut cart);
        log_event(
            None,
            "cart_remove",
            Some(serde_json::json!({ "product_id": product_id })),
        );
    }
    cart
}

/// Overwrites with the empty cart; no load-then-modify needed.
pub fn clear_cart(codec: &StoreCodec) -> Cart {
    let cart = Cart::empty();
    codec.save(CART_KEY, &cart);
    log_event(None, "cart_clear", None);
    cart
}

pub fn cart_item_count(codec: &StoreCodec) -> i32 {
    get_cart(codec).items.iter().map(|item| item.quantity).sum()
}

pub fn is_in_cart(codec: &StoreCodec, product_id: &str) -> bool {
    get_cart(codec)
        .items
        .iter()
        .any(|item| item.product.id == product_id)
}

fn persist(codec: &StoreCodec, cart: &mut Cart) {
    cart.total_price_excluding_vat = cart
        .items
        .iter()
        .map(|item| item.product.price * i64::from(item.quantity))
        .sum();
    codec.save(CART_KEY, cart);
}
