//! Command handlers for the storefront.
//!
//! Each handler module follows the microsvc convention:
//! - `COMMAND` - the command name this handler responds to
//! - `guard` - shape check on the raw input
//! - `handle` - the handler itself
//!
//! Route policy lives here: catalog writes, user listing and the sales
//! report require the `admin` role; checkout requires any authenticated
//! caller; registration, login and browsing are public.

use crate::app::Storefront;
use crate::microsvc::Service;
use crate::model::ModelStore;

pub mod checkout;
pub mod product_create;
pub mod product_delete;
pub mod product_get;
pub mod product_list;
pub mod product_update;
pub mod report_sales;
pub mod user_list;
pub mod user_login;
pub mod user_register;

/// Build the storefront service with every handler registered.
pub fn service<S: ModelStore + Clone + 'static>(app: Storefront<S>) -> Service<Storefront<S>> {
    crate::register_handlers!(
        Service::new(app),
        user_register,
        user_login,
        user_list,
        product_list,
        product_get,
        product_create,
        product_update,
        product_delete,
        checkout,
        report_sales,
    )
}
