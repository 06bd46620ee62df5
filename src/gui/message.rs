use crate::router::Route;

use super::screens::{
    ScreenMessage, home::HomeScreen, login::LoginScreen, portfolio::PortfolioScreen,
    signup::SignupScreen, topic::TopicScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Portfolio(ScreenMessage<PortfolioScreen>),
    Login(ScreenMessage<LoginScreen>),
    Signup(ScreenMessage<SignupScreen>),
    Home(ScreenMessage<HomeScreen>),
    Topic(ScreenMessage<TopicScreen>),
    /// Navigation request; the route guard decides what actually renders.
    Navigate(Route),
}
