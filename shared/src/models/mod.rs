//! Entity models and create/update payloads
//!
//! Every entity uses a snowflake `i64` id and millisecond timestamps from
//! [`crate::util`]. `sqlx::FromRow` derives are gated behind the `db`
//! feature so client-side consumers don't pull the database stack.

mod barcode;
mod brand;
mod business;
mod category;
mod customer;
mod employee;
mod expense;
mod invoice;
mod product;
mod product_group;
mod showroom;
mod supplier;
mod tax;
mod user;
mod warehouse;

pub use barcode::{Barcode, BarcodeBatchCreate};
pub use brand::{Brand, BrandCreate, BrandUpdate};
pub use business::{Business, BusinessUpdate};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use expense::{Expense, ExpenseCreate, ExpenseUpdate};
pub use invoice::{
    Invoice, InvoiceCreate, InvoiceItem, InvoiceLineCreate, InvoiceWithItems,
};
pub use product::{Product, ProductCreate, ProductTransfer, ProductUpdate, ProductWithRefs};
pub use product_group::{ProductGroup, ProductGroupCreate, ProductGroupUpdate};
pub use showroom::{Showroom, ShowroomCreate, ShowroomUpdate};
pub use supplier::{Supplier, SupplierCreate, SupplierUpdate};
pub use tax::{Tax, TaxCreate, TaxUpdate};
pub use user::{User, UserCreate, UserUpdate, roles};
pub use warehouse::{Warehouse, WarehouseCreate, WarehouseUpdate};
