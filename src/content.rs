//! Static department content.
//!
//! Every screen body in the application is fixed text. Nothing here is computed.

/// Name of the welcome screen.
pub const WELCOME_SCREEN: &str = "WELCOME";

/// Welcome screen title.
pub const WELCOME_TITLE: &str = "Welcome to LogiSphere";

/// Welcome screen subtitle.
pub const WELCOME_SUBTITLE: &str = "A demo Logistics, Supply Chain & Transport Management System";

/// Tips shown below the welcome title.
pub const WELCOME_TIPS: &str = "Use the buttons above to open department dashboards.\n\
This demo keeps data in memory. To persist, I can add JSON/CSV or JDBC features.\n\n\
Quick tips:\n \
- Use Inventory to add/update/delete products and view reorder alerts.\n \
- Use Supplier to manage suppliers and place orders.\n \
- Use Fleet to register vehicles, assign drivers and track maintenance.\n \
- Use Warehouse to simulate storage and optimization.\n \
- Use Customer to compute shipping costs and track shipments.";

/// One of the five fixed business areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Inventory,
    Supplier,
    Fleet,
    Warehouse,
    Customer,
}

impl Department {
    /// All departments in button-row order.
    pub const ALL: [Department; 5] = [
        Department::Inventory,
        Department::Supplier,
        Department::Fleet,
        Department::Warehouse,
        Department::Customer,
    ];

    /// Display name, also used as the screen name.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Inventory => "Inventory Management",
            Department::Supplier => "Supplier & Vendor Management",
            Department::Fleet => "Fleet Management",
            Department::Warehouse => "Warehouse Management",
            Department::Customer => "Customer Options",
        }
    }

    /// Look up a department by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Screen title for the department panel.
    pub fn title(&self) -> String {
        format!("Welcome to {}", self.name())
    }

    /// Fixed multi-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Department::Inventory => INVENTORY,
            Department::Supplier => SUPPLIER,
            Department::Fleet => FLEET,
            Department::Warehouse => WAREHOUSE,
            Department::Customer => CUSTOMER,
        }
    }
}

/// Description text for a department name.
///
/// Unknown names yield an empty string.
pub fn content_for(name: &str) -> &'static str {
    Department::from_name(name).map(|d| d.description()).unwrap_or_default()
}

const INVENTORY: &str = "Description: Track stock levels, reorder products, generate alerts.\n\n\
Features:\n \
- Add/Update/Delete Products\n \
- View Stock Levels\n \
- Automatic Reorder Alerts\n \
- [Button: Add New Product]\n \
- [Table: Current Stock]";

const SUPPLIER: &str = "Description: Manage suppliers, track orders, and generate reports.\n\n\
Features:\n \
- Supplier Database (Add/View/Edit)\n \
- Order Placement and Status Tracking\n \
- Vendor Performance Analytics\n \
- [Button: Place New Order]\n \
- [Button: View All Suppliers]";

const FLEET: &str = "Description: Manage delivery vehicles, driver schedules, and maintenance.\n\n\
Features:\n \
- Vehicle Registration & Tracking (Live Map)\n \
- Driver Assignments and Schedules\n \
- Maintenance Alerts\n \
- [Button: Assign Driver to Vehicle]\n \
- [Panel: Vehicle Status Dashboard]";

const WAREHOUSE: &str = "Description: Simulate warehouse operations: picking, packing, storage.\n\n\
Features:\n \
- Add/Remove Items in Warehouse\n \
- Optimize Space for Storage (Visual Map)\n \
- Generate Operational Efficiency Reports\n \
- [Button: Check In Item]\n \
- [Button: Fulfill Order (Pick/Pack)]";

const CUSTOMER: &str = "Description: Calculate costs and track shipments.\n\n\
Features:\n \
- Calculate Total Logistics Costs\n   \
- Input Weight, Distance, Mode of Transport\n   \
- Generate Cost Breakdown\n   \
- Compare Costs\n \
- Track Shipments (by ID)\n \
- [TextField: Enter Tracking ID]\n \
- [Panel: Cost Calculator Form]";
