pub const RENDER_WIDTH: i32 = 1280;            // Default window width
pub const RENDER_HEIGHT: i32 = 720;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const AUTOPLAY_INTERVAL: f32 = 6.0;        // Seconds between autoplay advances
pub const COUNTER_DURATION: f32 = 1.5;         // Total counter animation time (seconds)
pub const COUNTER_TICK: f32 = 0.016;           // Fixed counter tick (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;         // Minimum horizontal swipe distance (pixels)

pub const TOAST_SLIDE: f32 = 0.3;              // Toast slide-in / slide-out time (seconds)
pub const TOAST_VISIBLE: f32 = 3.0;            // Time a toast stays fully visible (seconds)
pub const SUBMIT_DELAY: f32 = 2.0;             // Simulated form round-trip time (seconds)

pub const PARTICLE_COUNT: usize = 48;          // Decorative background particles
