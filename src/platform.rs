//! View-state machines for the three front ends.
//!
//! Each front end is a small enum plus the transitions its buttons trigger.
//! Rendering is somebody else's job; these types only say which screen is
//! showing and where a button leads.

use crate::model::OrderId;
use serde::{Deserialize, Serialize};

/// Chosen on the platform selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Qr,
    Mobile,
    Dashboard,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Qr, Platform::Mobile, Platform::Dashboard];

    pub fn title(self) -> &'static str {
        match self {
            Platform::Qr => "QR Table Ordering",
            Platform::Mobile => "Customer App",
            Platform::Dashboard => "Admin Dashboard",
        }
    }
}

/// How a table chooses to order on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderMode {
    Game,
    Manual,
}

/// QR table flow: landing, one of the two ordering modes, then the queue
/// screen for the order just placed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QrScreen {
    #[default]
    Landing,
    Game,
    Manual,
    Queue(OrderId),
}

impl QrScreen {
    pub fn select_mode(&self, mode: OrderMode) -> QrScreen {
        match self {
            QrScreen::Landing => match mode {
                OrderMode::Game => QrScreen::Game,
                OrderMode::Manual => QrScreen::Manual,
            },
            other => other.clone(),
        }
    }

    /// Placing an order from either mode moves to its queue screen.
    pub fn order_placed(&self, id: OrderId) -> QrScreen {
        match self {
            QrScreen::Game | QrScreen::Manual => QrScreen::Queue(id),
            other => other.clone(),
        }
    }

    pub fn back(&self) -> QrScreen {
        match self {
            QrScreen::Game | QrScreen::Manual => QrScreen::Landing,
            other => other.clone(),
        }
    }

    /// The customer is done watching the queue.
    pub fn finish(&self) -> QrScreen {
        match self {
            QrScreen::Queue(_) => QrScreen::Landing,
            other => other.clone(),
        }
    }

    pub fn tracked_order(&self) -> Option<&OrderId> {
        match self {
            QrScreen::Queue(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobileScreen {
    #[default]
    Home,
    RandomMenu,
    SpinWheel,
    AiChat,
    Community,
    Wallet,
    Profile,
}

impl MobileScreen {
    /// Every feature reachable from the home screen.
    pub const FEATURES: [MobileScreen; 6] = [
        MobileScreen::RandomMenu,
        MobileScreen::SpinWheel,
        MobileScreen::AiChat,
        MobileScreen::Community,
        MobileScreen::Wallet,
        MobileScreen::Profile,
    ];

    /// Navigation only happens from `Home`; elsewhere the screen stays put.
    pub fn navigate(self, to: MobileScreen) -> MobileScreen {
        match self {
            MobileScreen::Home => to,
            current => current,
        }
    }

    pub fn back(self) -> MobileScreen {
        MobileScreen::Home
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Orders,
    Sales,
    Reviews,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_flow() {
        let screen = QrScreen::default();
        assert_eq!(screen, QrScreen::Landing);

        let game = screen.select_mode(OrderMode::Game);
        assert_eq!(game, QrScreen::Game);
        assert_eq!(game.back(), QrScreen::Landing);

        let queue = game.order_placed(OrderId::from("order-7"));
        assert_eq!(queue.tracked_order(), Some(&OrderId::from("order-7")));
        assert_eq!(queue.back(), queue);
        assert_eq!(queue.finish(), QrScreen::Landing);
    }

    #[test]
    fn test_qr_ignores_out_of_place_actions() {
        let landing = QrScreen::Landing;
        assert_eq!(landing.order_placed(OrderId::from("x")), QrScreen::Landing);
        assert_eq!(landing.finish(), QrScreen::Landing);
        assert_eq!(
            QrScreen::Manual.select_mode(OrderMode::Game),
            QrScreen::Manual
        );
    }

    #[test]
    fn test_mobile_navigation_goes_through_home() {
        for feature in MobileScreen::FEATURES {
            let screen = MobileScreen::Home.navigate(feature);
            assert_eq!(screen, feature);
            assert_eq!(screen.navigate(MobileScreen::Wallet), feature);
            assert_eq!(screen.back(), MobileScreen::Home);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DashboardTab::default(), DashboardTab::Orders);
        assert_eq!(Platform::Dashboard.title(), "Admin Dashboard");
    }

    #[test]
    fn test_platform_selector_lists_each_front_end_once() {
        let titles: Vec<&str> = Platform::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec!["QR Table Ordering", "Customer App", "Admin Dashboard"]
        );
    }
}
