//! Demo data loaded at startup.

use rust_decimal::Decimal;

use crate::catalog::NewProduct;

/// (id, name, image, description, price in cents, stock)
type Row = (&'static str, &'static str, &'static str, &'static str, i64, i64);

const DEMO_PRODUCTS: &[Row] = &[
        ("P001", "Stylish Headset", "ONIKUMA-GT803-Over-Ear-Headset-Noise-Canceling-HiFi-Stereo-Sound-Quality-Stylish-Ear-Hook-Gaming-Wireless-Headphone-With-Mic.jpg", "High-fidelity sound with noise-canceling technology. Perfect for work and music.", 5999, 15),
        ("P002", "Ergonomic Mouse", "71hcBp7MA6L.jpg", "Designed for comfort and precision. Reduces wrist strain for long work sessions.", 2450, 50),
        ("P003", "Portable Charger", "71NVBNrF1pL._AC_UF894,1000_QL80_.jpg", "20000mAh power bank. Fast charging for all your devices on the go.", 3500, 0),
        ("P004", "4K Webcam Pro", "dsga35yesrthgdfh_1024x.jpg", "Crystal-clear video for professional streaming and video calls.", 8900, 22),
        ("P005", "Noise-Cancelling Buds", "noise-cancelling-headphone-2048px.jpg", "Ultra-compact earbuds with incredible battery life and sound.", 12999, 30),
        ("P006", "Mechanical Keyboard", "BEST-MECHANICAL-KEYBOARDS-2048px-0673.jpg", "Tactile brown switches for a satisfying typing experience.", 9995, 12),
        ("P007", "Smart Fitness Watch", "venu-x1-black-cf-lg.jpg", "Tracks steps, heart rate, and sleep. Stay motivated and healthy!", 4999, 45),
        ("P008", "Portable SSD 1TB", "wise-256gb-portable-ssd-hard-drive_1_o.jpg", "Lightning-fast storage for backups and large media files.", 11900, 8),
        ("P009", "Gaming Monitor 27\"", "53_28a9d0f0-d092-417b-b6ce-f4443080dcba.jpg", "144Hz refresh rate, curved display for an immersive gaming experience.", 29999, 5),
        ("P010", "Mini Projector", "71U0ezDt70L.jpg", "Pocket-sized projector for movies anywhere. Great for travel.", 15000, 18),
        ("P011", "Wireless Charging Pad", "GallryImage1-EP-PN920TCEGUS.png", "Charge your phone, watch, and earbuds simultaneously, clutter-free.", 3999, 60),
        ("P012", "Laptop Stand", "6957303842919_800x.png", "Ergonomic aluminum stand to improve airflow and posture.", 2900, 75),
        ("P013", "Mesh Wi-Fi System", "meshwifi_tcm167-160373.jpg", "Eliminate dead zones with seamless, whole-home wireless coverage.", 19999, 10),
        ("P014", "Portable Bluetooth Speaker", "Eaton-5A-1500I-NEMA-Line-Interactive-UPS-btz.png", "Rugged and waterproof with 24 hours of playtime. Perfect for outdoors.", 7950, 40),
        ("P015", "LED Desk Lamp", "Honeywell-H9-Smart-Sensing-Desk-Lamp-Honeywell-18605069.jpg", "Adjustable brightness and color temperature for any task.", 4500, 25),
        ("P016", "Stylus Pen Pro", "Best-Selling-Universal-Stylus-Pencil-for-iPad-PRO-Min-Air-Active-Android-Touch-Pen-for-Tablet-Laptop-Smart-Phone.png", "High-precision tip for drawing and note-taking on tablets.", 3299, 90),
        ("P017", "Smart Plug Set (4-Pack)", "3f8b8f62-b976-47b5-83ea-38ef162e5c2e.080b0a8659545494a2f41a80936ac812.png", "Control your appliances from anywhere using a simple mobile app.", 4900, 0),
        ("P018", "VR Headset Starter Kit", "meta-quest-3s-1_39d59f14-b14f-4572-aea4-6baab0ef65f0.png", "Dive into immersive virtual reality experiences right from your home.", 25000, 3),
        ("P019", "Digital Drawing Tablet", "Digital-Art-Tablet-TSV-6-x-10-Graphics-Drawing-Tablet-with-8192-Levels-Passive-Stylus-Fit-for-Drawing-E-Learning-Online-Classes_3a066736-603d-470f-9a6d-1b123ab57cd5.733b8681aa65efd8.png", "Large active area and pressure sensitivity for digital artists.", 14999, 7),
        ("P020", "GPS Drone (Foldable)", "D99-GPS-Drone-with-8K-UHD-Camera-Foldable-Drones-for-Adults-Beginners-RC-Quadcopter-Drone-Brushless-Motor-VR-Mode-GPS-Auto-Follow_267eafbc-2e77-4c00-a7f8-6b85eaefb315.a78d92752e6f26.png", "Easy-to-fly drone with 4K camera and automatic return-to-home feature.", 39900, 15),
];

/// The twenty-product demo catalog.
pub fn demo_catalog() -> Vec<NewProduct> {
    DEMO_PRODUCTS
        .iter()
        .map(|&(id, name, image, description, cents, stock)| NewProduct {
            id: id.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            price: Decimal::new(cents, 2),
            stock,
        })
        .collect()
}
