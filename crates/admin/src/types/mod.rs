//! Domain types for the admin API.
//!
//! One module per backend resource, plus the shared pagination envelope.

pub mod banner;
pub mod category;
pub mod common;
pub mod coupon;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod user;

pub use banner::{Banner, NewBanner};
pub use category::{Category, CategoryUpdate, NewCategory};
pub use common::Paginated;
pub use coupon::{Coupon, CouponValidation, CouponValidationRequest, NewCoupon};
pub use dashboard::{CategorySales, OverviewStats, ReportSummary, SalesReport, SalesRow};
pub use order::{Order, OrderItem, OrderStatusUpdate, ShippingDetails};
pub use product::{
    ImageUpload, NewProduct, NewVariant, Product, ProductImage, ProductUpdate, Variant,
    VariantUpdate,
};
pub use user::AdminUser;
