//! Static module catalog: business workflows, their sections and pages.

use egui_phosphor::regular::{BOOK_OPEN, CURRENCY_DOLLAR, GEAR, SHOPPING_CART};

/// Top-level business workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleKey {
    #[default]
    Accounts,
    Retail,
    Sales,
    Management,
}

impl ModuleKey {
    /// All modules in sidebar order.
    pub const ALL: [ModuleKey; 4] = [
        ModuleKey::Accounts,
        ModuleKey::Retail,
        ModuleKey::Sales,
        ModuleKey::Management,
    ];

    /// Stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKey::Accounts => "accounts",
            ModuleKey::Retail => "retail",
            ModuleKey::Sales => "sales",
            ModuleKey::Management => "management",
        }
    }

    /// Catalog entry for this key.
    pub fn module(&self) -> &'static Module {
        match self {
            ModuleKey::Accounts => &ACCOUNTS,
            ModuleKey::Retail => &RETAIL,
            ModuleKey::Sales => &SALES,
            ModuleKey::Management => &MANAGEMENT,
        }
    }

    /// Column headers for the data table. Management has none.
    pub fn table_headers(&self) -> &'static [&'static str] {
        match self {
            ModuleKey::Accounts => &["Date", "Reference", "Description", "Debit", "Credit", "Balance"],
            ModuleKey::Retail => &["ISBN", "Title", "Author", "Publisher", "Stock", "Price"],
            ModuleKey::Sales => &["Date", "Invoice", "Customer", "Items", "Amount", "Status"],
            ModuleKey::Management => &[],
        }
    }
}

/// A business workflow with its navigation tree.
#[derive(Debug)]
pub struct Module {
    pub key: ModuleKey,
    pub title: &'static str,
    pub icon: &'static str,
    pub sections: &'static [Section],
}

/// Group of pages inside a module.
#[derive(Debug)]
pub struct Section {
    pub label: &'static str,
    pub pages: &'static [&'static str],
}

static ACCOUNTS: Module = Module {
    key: ModuleKey::Accounts,
    title: "Accounts Workflow",
    icon: CURRENCY_DOLLAR,
    sections: &[
        Section {
            label: "financial",
            pages: &["Ledger", "Daybook", "Trial Balance", "Profit & Loss"],
        },
        Section {
            label: "transactions",
            pages: &["Payments", "Receipts", "Bank Reconciliation"],
        },
        Section {
            label: "reports",
            pages: &["Financial Reports", "Tax Reports", "Audit Logs"],
        },
    ],
};

static RETAIL: Module = Module {
    key: ModuleKey::Retail,
    title: "Retail Workflow",
    icon: BOOK_OPEN,
    sections: &[
        Section {
            label: "inventory",
            pages: &["Book List", "Stock Control", "Categories"],
        },
        Section {
            label: "procurement",
            pages: &["Purchase Orders", "Receive Stock", "Returns"],
        },
        Section {
            label: "catalog",
            pages: &["Author Management", "Publisher Setup", "Price Lists"],
        },
    ],
};

static SALES: Module = Module {
    key: ModuleKey::Sales,
    title: "Sales Workflow",
    icon: SHOPPING_CART,
    sections: &[
        Section {
            label: "operations",
            pages: &["POS Terminal", "Quotations", "Orders"],
        },
        Section {
            label: "customer",
            pages: &["Customer Database", "Loyalty Program", "Returns"],
        },
        Section {
            label: "analytics",
            pages: &["Sales Reports", "Performance Metrics", "Forecasting"],
        },
    ],
};

static MANAGEMENT: Module = Module {
    key: ModuleKey::Management,
    title: "Management Workflow",
    icon: GEAR,
    sections: &[
        Section {
            label: "admin",
            pages: &["User Management", "Roles & Permissions", "Audit Trail"],
        },
        Section {
            label: "settings",
            pages: &["System Config", "Backup/Restore", "Integrations"],
        },
        Section {
            label: "reports",
            pages: &["System Reports", "Error Logs", "Activity Logs"],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_module_has_three_sections() {
        for key in ModuleKey::ALL {
            let module = key.module();
            assert_eq!(module.key, key);
            assert_eq!(module.sections.len(), 3, "{}", key.as_str());
        }
    }

    #[test]
    fn test_retail_sections_in_order() {
        let labels: Vec<_> = ModuleKey::Retail.module().sections.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["inventory", "procurement", "catalog"]);
        assert_eq!(
            ModuleKey::Retail.module().sections[0].pages,
            ["Book List", "Stock Control", "Categories"]
        );
    }

    #[test]
    fn test_accounts_financial_pages() {
        assert_eq!(
            ModuleKey::Accounts.module().sections[0].pages,
            ["Ledger", "Daybook", "Trial Balance", "Profit & Loss"]
        );
    }

    #[test]
    fn test_management_has_no_headers() {
        assert!(ModuleKey::Management.table_headers().is_empty());
        assert_eq!(ModuleKey::Sales.table_headers().len(), 6);
    }

    #[test]
    fn test_returns_page_is_shared() {
        let modules_with_returns: Vec<_> = ModuleKey::ALL
            .into_iter()
            .filter(|k| k.module().sections.iter().any(|s| s.pages.contains(&"Returns")))
            .collect();
        assert_eq!(modules_with_returns, [ModuleKey::Retail, ModuleKey::Sales]);
    }
}
