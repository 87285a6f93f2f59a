mod welcome;
pub use welcome::Welcome;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod dashboard;
pub use dashboard::Dashboard;
