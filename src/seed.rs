//! Start-up data: generated records plus the fixed catalogues
//!
//! Generated collections reference each other the same way a hand-entered
//! data set would: invoice `i` and receipt `i` belong to customer
//! `i mod customers`, project/user `i` to company `i mod companies`, user `i`
//! holds role `i mod roles`. Dates are relative to the `today` passed in.

use crate::config::SeedConfig;
use crate::core::id::generate_id_with;
use crate::entities::{
    AccessRight, Company, CompanyStatus, Customer, Employee, Feedback, FeedbackStatus, IdType,
    Invoice, InvoiceItem, InvoiceStatus, Project, ProjectStatus, Receipt, Supplier, User,
    UserRole, UserStatus,
};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POSITIONS: [&str; 5] = ["Manager", "Developer", "Designer", "Sales", "Support"];
const DEPARTMENTS: [&str; 5] = ["Engineering", "Marketing", "Sales", "Administration", "Finance"];
const ID_PREFIXES: [&str; 4] = ["110101", "E00", "D1234", "X"];
const SUPPLIER_CATEGORIES: [&str; 4] = ["Office Supplies", "Electronics", "Raw Materials", "Services"];
const PAYMENT_METHODS: [&str; 4] = ["Cash", "Alipay", "WeChat Pay", "Bank Card"];

/// Every collection the back office starts with
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub employees: Vec<Employee>,
    pub customers: Vec<Customer>,
    pub suppliers: Vec<Supplier>,
    pub invoices: Vec<Invoice>,
    pub receipts: Vec<Receipt>,
    pub feedback: Vec<Feedback>,
    pub companies: Vec<Company>,
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub roles: Vec<UserRole>,
    pub access_rights: Vec<AccessRight>,
}

impl SeedData {
    /// Generate a data set. A configured `rng_seed` makes it reproducible.
    pub fn generate(config: &SeedConfig, today: NaiveDate) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut generator = Generator { rng, today };

        let employees = (0..config.employees).map(|i| generator.employee(i)).collect();
        let customers: Vec<Customer> = (0..config.customers).map(|i| generator.customer(i)).collect();
        let suppliers = (0..config.suppliers).map(|i| generator.supplier(i)).collect();
        let companies: Vec<Company> = (0..config.companies).map(|i| generator.company(i)).collect();
        let roles = fixed_roles(today);

        let (invoices, receipts) = if customers.is_empty() {
            if config.invoices + config.receipts > 0 {
                tracing::warn!("no customers to bill; skipping invoices and receipts");
            }
            (Vec::new(), Vec::new())
        } else {
            let invoices = (0..config.invoices)
                .map(|i| generator.invoice(i, &customers[i % customers.len()]))
                .collect();
            let receipts = (0..config.receipts)
                .map(|i| generator.receipt(i, &customers[i % customers.len()]))
                .collect();
            (invoices, receipts)
        };

        let (projects, users) = if companies.is_empty() {
            if config.projects + config.users > 0 {
                tracing::warn!("no companies; skipping projects and users");
            }
            (Vec::new(), Vec::new())
        } else {
            let projects = (0..config.projects)
                .map(|i| generator.project(i, &companies[i % companies.len()]))
                .collect();
            let users = (0..config.users)
                .map(|i| {
                    generator.user(
                        i,
                        &companies[i % companies.len()],
                        &roles[i % roles.len()],
                    )
                })
                .collect();
            (projects, users)
        };

        let data = Self {
            employees,
            customers,
            suppliers,
            invoices,
            receipts,
            feedback: fixed_feedback(),
            companies,
            projects,
            users,
            roles,
            access_rights: fixed_access_rights(&mut generator.rng, today),
        };

        tracing::info!(
            employees = data.employees.len(),
            customers = data.customers.len(),
            suppliers = data.suppliers.len(),
            invoices = data.invoices.len(),
            receipts = data.receipts.len(),
            companies = data.companies.len(),
            projects = data.projects.len(),
            users = data.users.len(),
            "seed data generated"
        );
        data
    }
}

struct Generator {
    rng: StdRng,
    today: NaiveDate,
}

impl Generator {
    fn id(&mut self) -> String {
        generate_id_with(&mut self.rng)
    }

    /// A date up to `max_days` before today
    fn days_ago(&mut self, max_days: i64) -> NaiveDate {
        self.today - Duration::days(self.rng.gen_range(0..=max_days))
    }

    /// A date up to `max_days` after today
    fn days_ahead(&mut self, max_days: i64) -> NaiveDate {
        self.today + Duration::days(self.rng.gen_range(0..=max_days))
    }

    fn employee(&mut self, i: usize) -> Employee {
        let birth = (19_900_101 + i * 111_111).to_string();
        let serial = (1000 + i).to_string();
        let salary = self.rng.gen_range(5000.0..20000.0_f64);

        Employee {
            id: self.id(),
            name: format!("Employee {}", i + 1),
            avatar: None,
            email: format!("employee{}@example.com", i + 1),
            phone: format!("1380013800{i}"),
            id_type: IdType::ALL[i % IdType::ALL.len()],
            id_no: format!(
                "{}{}{}",
                ID_PREFIXES[i % ID_PREFIXES.len()],
                &birth[..8],
                &serial[1..]
            ),
            position: POSITIONS[i % POSITIONS.len()].to_string(),
            department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
            hire_date: self.days_ago(3 * 365),
            salary: (salary * 100.0).round() / 100.0,
        }
    }

    fn customer(&mut self, i: usize) -> Customer {
        Customer {
            id: self.id(),
            name: format!("Customer {}", i + 1),
            email: format!("customer{}@example.com", i + 1),
            phone: format!("1390013900{i}"),
            address: format!("No. {} Sample Street, Chaoyang, Beijing", i + 1),
            created_at: self.days_ago(365),
            last_purchase: self.days_ago(30),
            total_spent: self.rng.gen_range(100.0..10000.0),
        }
    }

    fn supplier(&mut self, i: usize) -> Supplier {
        Supplier {
            id: self.id(),
            name: format!("Supplier {}", i + 1),
            contact_person: format!("Contact {}", i + 1),
            email: format!("supplier{}@example.com", i + 1),
            phone: format!("1370013700{i}"),
            address: format!("No. {} Sample Road, Pudong, Shanghai", i + 1),
            category: SUPPLIER_CATEGORIES[i % SUPPLIER_CATEGORIES.len()].to_string(),
            since: self.days_ago(2 * 365),
        }
    }

    fn invoice(&mut self, i: usize, customer: &Customer) -> Invoice {
        let item_count = self.rng.gen_range(1..=4);
        let items = (0..item_count)
            .map(|j| {
                let mut item = InvoiceItem::new(
                    format!("Item {}", j + 1),
                    self.rng.gen_range(1..=10),
                    self.rng.gen_range(100.0..1000.0),
                );
                item.id = self.id();
                item
            })
            .collect();

        let mut invoice = Invoice {
            id: self.id(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            date: self.days_ago(90),
            due_date: self.days_ago(60),
            items,
            total_amount: 0.0,
            status: InvoiceStatus::ALL[i % InvoiceStatus::ALL.len()],
        };
        invoice.recalculate();
        invoice
    }

    fn receipt(&mut self, i: usize, customer: &Customer) -> Receipt {
        Receipt {
            id: self.id(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            date: self.days_ago(30),
            amount: self.rng.gen_range(50.0..5000.0),
            payment_method: PAYMENT_METHODS[i % PAYMENT_METHODS.len()].to_string(),
            description: format!("Purchase {}", i + 1),
        }
    }

    fn company(&mut self, i: usize) -> Company {
        Company {
            id: self.id(),
            code: format!("COM{:03}", i + 1),
            name: format!("Company {}", i + 1),
            address: format!("No. {} Sample Street, Haidian, Beijing", i + 1),
            phone: format!("010-8888{i:04}"),
            email: format!("company{}@example.com", i + 1),
            created_at: self.days_ago(365),
            status: if i % 4 == 0 {
                CompanyStatus::Inactive
            } else {
                CompanyStatus::Active
            },
        }
    }

    fn project(&mut self, i: usize, company: &Company) -> Project {
        Project {
            id: self.id(),
            code: format!("PRJ{:03}", i + 1),
            name: format!("Project {}", i + 1),
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            start_date: self.days_ago(180),
            end_date: self.days_ahead(180),
            status: ProjectStatus::ALL[i % ProjectStatus::ALL.len()],
            description: format!("Description of project {}", i + 1),
        }
    }

    fn user(&mut self, i: usize, company: &Company, role: &UserRole) -> User {
        User {
            id: self.id(),
            username: format!("user{}", i + 1),
            email: format!("user{}@example.com", i + 1),
            phone: format!("1350013500{i}"),
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            role_id: role.id.clone(),
            role_name: role.name.clone(),
            status: if i % 5 == 0 {
                UserStatus::Inactive
            } else {
                UserStatus::Active
            },
            created_at: self.days_ago(365),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn codes(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

fn fixed_feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "fb001".to_string(),
            title: "Slow page loads".to_string(),
            description: "The reports page takes a long time to load its data; \
                          please optimise the queries."
                .to_string(),
            images: Vec::new(),
            created_at: date(2024, 1, 15),
            status: FeedbackStatus::Reviewed,
        },
        Feedback {
            id: "fb002".to_string(),
            title: "Add an export feature".to_string(),
            description: "It would help to export the customer list to Excel for offline review."
                .to_string(),
            images: Vec::new(),
            created_at: date(2024, 1, 18),
            status: FeedbackStatus::Pending,
        },
        Feedback {
            id: "fb003".to_string(),
            title: "Invoice details render incorrectly".to_string(),
            description: "Images do not display on the invoice details view; screenshot attached."
                .to_string(),
            images: Vec::new(),
            created_at: date(2024, 1, 20),
            status: FeedbackStatus::Resolved,
        },
    ]
}

fn fixed_roles(today: NaiveDate) -> Vec<UserRole> {
    let role = |id: &str, name: &str, code: &str, description: &str, perms: &[&str], age: i64| {
        UserRole {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            permissions: codes(perms),
            created_at: today - Duration::days(age),
        }
    };

    vec![
        role(
            "role001",
            "System Administrator",
            "ADMIN",
            "Holds every permission",
            &[
                "user.create",
                "user.read",
                "user.update",
                "user.delete",
                "company.create",
                "company.read",
                "company.update",
                "company.delete",
            ],
            365,
        ),
        role(
            "role002",
            "Project Manager",
            "PM",
            "Manages projects and team members",
            &["project.create", "project.read", "project.update", "user.read"],
            300,
        ),
        role(
            "role003",
            "Standard User",
            "USER",
            "Read-only access",
            &["project.read", "company.read"],
            200,
        ),
        role(
            "role004",
            "Finance Officer",
            "FINANCE",
            "Manages financial records",
            &[
                "invoice.create",
                "invoice.read",
                "invoice.update",
                "receipt.create",
                "receipt.read",
                "receipt.update",
            ],
            250,
        ),
    ]
}

fn fixed_access_rights(rng: &mut StdRng, today: NaiveDate) -> Vec<AccessRight> {
    let created_at = today - Duration::days(365);
    [
        ("Create user", "user.create", "Permission to create new users"),
        ("View user", "user.read", "Permission to view user details"),
        ("Update user", "user.update", "Permission to update user details"),
        ("Delete user", "user.delete", "Permission to delete users"),
        ("Create company", "company.create", "Permission to create new companies"),
    ]
    .into_iter()
    .map(|(name, code, description)| {
        let (module, action) = code.split_once('.').unwrap_or((code, ""));
        AccessRight {
            id: generate_id_with(rng),
            name: name.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            module: module.to_string(),
            action: action.to_string(),
            created_at,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn seeded() -> SeedData {
        SeedData::generate(
            &SeedConfig {
                rng_seed: Some(1),
                ..SeedConfig::default()
            },
            today(),
        )
    }

    #[test]
    fn test_default_counts() {
        let data = seeded();
        assert_eq!(data.employees.len(), 10);
        assert_eq!(data.customers.len(), 15);
        assert_eq!(data.suppliers.len(), 8);
        assert_eq!(data.invoices.len(), 12);
        assert_eq!(data.receipts.len(), 15);
        assert_eq!(data.feedback.len(), 3);
        assert_eq!(data.companies.len(), 5);
        assert_eq!(data.projects.len(), 5);
        assert_eq!(data.users.len(), 5);
        assert_eq!(data.roles.len(), 4);
        assert_eq!(data.access_rights.len(), 5);
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = seeded();
        let b = seeded();
        assert_eq!(a.customers, b.customers);
        assert_eq!(a.invoices, b.invoices);
    }

    #[test]
    fn test_customer_ids_are_unique() {
        let data = seeded();
        let ids: HashSet<_> = data.customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), data.customers.len());
    }

    #[test]
    fn test_invoices_reference_customers_and_totals_hold() {
        let data = seeded();
        for (i, invoice) in data.invoices.iter().enumerate() {
            let customer = &data.customers[i % data.customers.len()];
            assert_eq!(invoice.customer_id, customer.id);
            assert_eq!(invoice.customer_name, customer.name);
            assert!((1..=4).contains(&invoice.items.len()));
            assert!((invoice.total_amount - invoice.items_total()).abs() < 1e-9);
            assert_eq!(invoice.status, InvoiceStatus::ALL[i % 4]);
        }
    }

    #[test]
    fn test_employee_id_numbers() {
        let data = seeded();
        assert_eq!(data.employees[0].id_no, "11010119900101000");
        assert_eq!(data.employees[1].id_type, IdType::Passport);
        assert!(data.employees[1].id_no.starts_with("E0020011212"));
    }

    #[test]
    fn test_status_cycles() {
        let data = seeded();
        assert_eq!(data.companies[0].status, CompanyStatus::Inactive);
        assert_eq!(data.companies[4].status, CompanyStatus::Inactive);
        assert_eq!(data.companies[1].status, CompanyStatus::Active);
        assert_eq!(data.users[0].status, UserStatus::Inactive);
        assert_eq!(data.users[1].role_id, "role002");
        assert_eq!(data.projects[2].status, ProjectStatus::Completed);
        assert_eq!(data.companies[0].code, "COM001");
        assert_eq!(data.companies[0].phone, "010-88880000");
    }

    #[test]
    fn test_dates_relative_to_today() {
        let data = seeded();
        for project in &data.projects {
            assert!(project.start_date <= today());
            assert!(project.end_date >= today());
        }
        for customer in &data.customers {
            assert!(customer.last_purchase >= today() - Duration::days(30));
        }
    }

    #[test]
    fn test_no_customers_means_no_invoices() {
        let data = SeedData::generate(
            &SeedConfig {
                customers: 0,
                companies: 0,
                rng_seed: Some(3),
                ..SeedConfig::default()
            },
            today(),
        );
        assert!(data.invoices.is_empty());
        assert!(data.receipts.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.users.is_empty());
        assert_eq!(data.roles.len(), 4);
    }
}
