//! Age tiers and the bulk discount.

/// Attendees younger than this get in free.
pub const YOUTH_FROM_AGE: u32 = 18;
/// Attendees this age and older pay the full price.
pub const ADULT_FROM_AGE: u32 = 25;

pub const YOUTH_PRICE: f64 = 990.0;
pub const ADULT_PRICE: f64 = 1390.0;

/// Orders with more tickets than this get the discount.
pub const BULK_THRESHOLD: u32 = 3;
pub const BULK_DISCOUNT_FACTOR: f64 = 0.9;

/// Price of one ticket. Tier boundaries are inclusive-lower.
pub fn ticket_price(age: u32) -> f64 {
    if age < YOUTH_FROM_AGE {
        0.0
    } else if age < ADULT_FROM_AGE {
        YOUTH_PRICE
    } else {
        ADULT_PRICE
    }
}

/// Running total of one order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    tickets: u32,
    subtotal: f64,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ticket(&mut self, age: u32) {
        self.tickets += 1;
        self.subtotal += ticket_price(age);
    }

    pub fn ticket_count(&self) -> u32 {
        self.tickets
    }

    /// Sum of ticket prices before any discount.
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    pub fn is_discounted(&self) -> bool {
        self.tickets > BULK_THRESHOLD
    }

    /// Amount payable, rounded to whole roubles.
    pub fn total(&self) -> u64 {
        let mut cost = self.subtotal;
        if self.is_discounted() {
            cost *= BULK_DISCOUNT_FACTOR;
        }
        cost.round() as u64
    }
}

pub fn order_total(ages: &[u32]) -> u64 {
    let mut order = Order::new();
    for &age in ages {
        order.add_ticket(age);
    }
    order.total()
}
