// Prototype Pattern - Shallow vs Deep Copy
// An employee record whose nested address is either shared with the copy
// (shallow) or duplicated into a fresh allocation (deep).

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tracing::debug;

/// Shared, mutable handle to an [`Address`].
pub type AddressHandle = Rc<RefCell<Address>>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub road_no: String,
    pub house_no: String,
}

impl Address {
    pub fn new(road_no: impl Into<String>, house_no: impl Into<String>) -> Self {
        Self {
            road_no: road_no.into(),
            house_no: house_no.into(),
        }
    }

    pub fn into_handle(self) -> AddressHandle {
        Rc::new(RefCell::new(self))
    }
}

/// Objects that can produce copies of themselves under two aliasing contracts.
pub trait Prototype: Sized {
    /// Copies top-level fields; nested records stay shared with `self`.
    fn shallow_copy(&self) -> Self;

    /// Copies top-level fields and every owned nested record.
    fn deep_copy(&self) -> Self;
}

/// Employee record. The address is always present, so both copies are total.
/// Not `Clone`; copies go through [`Prototype`].
#[derive(Debug, PartialEq, Eq)]
pub struct Employee {
    first_name: String,
    last_name: String,
    email: String,
    mobile_no: String,
    address: AddressHandle,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        mobile_no: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            mobile_no: mobile_no.into(),
            address: address.into_handle(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mobile_no(&self) -> &str {
        &self.mobile_no
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_mobile_no(&mut self, value: impl Into<String>) {
        self.mobile_no = value.into();
    }

    /// The handle itself; cloning it aliases the address.
    pub fn address(&self) -> &AddressHandle {
        &self.address
    }

    pub fn address_ref(&self) -> Ref<'_, Address> {
        self.address.borrow()
    }

    /// Owned copy of the address fields as they are right now.
    pub fn address_snapshot(&self) -> Address {
        self.address.borrow().clone()
    }

    /// Writes through the handle, so every alias sees the change.
    pub fn set_road_no(&self, value: impl Into<String>) {
        self.address.borrow_mut().road_no = value.into();
    }

    pub fn set_house_no(&self, value: impl Into<String>) {
        self.address.borrow_mut().house_no = value.into();
    }

    pub fn shares_address_with(&self, other: &Employee) -> bool {
        Rc::ptr_eq(&self.address, &other.address)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Prototype for Employee {
    fn shallow_copy(&self) -> Self {
        debug!(employee = %self.full_name(), "shallow copy");
        Self {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile_no: self.mobile_no.clone(),
            address: Rc::clone(&self.address),
        }
    }

    fn deep_copy(&self) -> Self {
        debug!(employee = %self.full_name(), "deep copy");
        let current = self.address.borrow();
        let address = Address {
            road_no: current.road_no.clone(),
            house_no: current.house_no.clone(),
        };
        Self {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile_no: self.mobile_no.clone(),
            address: address.into_handle(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
