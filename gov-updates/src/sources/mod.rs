pub mod bills;
pub mod executive_orders;

pub use bills::BillSource;
pub use executive_orders::ExecutiveOrderSource;
