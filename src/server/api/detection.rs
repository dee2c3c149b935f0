//! Crop-scan and disease-detection endpoints.
//!
//! There is no imaging model behind these; they return canned reports and
//! never consult the store. The detection endpoint flips a coin so the UI
//! exercises both its healthy and diseased paths.

use axum::Json;
use rand::Rng;

use crate::server::dto::{DetectionReport, ScanReport};

pub async fn scan_crop() -> Json<ScanReport> {
    Json(ScanReport {
        crop: "Rice",
        health: "Healthy",
        issues: Vec::new(),
        recommendations: vec![
            "Continue current irrigation schedule",
            "Apply nitrogen in 5 days",
        ],
    })
}

pub async fn detect_disease() -> Json<DetectionReport> {
    let report = if rand::thread_rng().gen_bool(0.5) {
        healthy_report()
    } else {
        blight_report()
    };
    Json(report)
}

fn healthy_report() -> DetectionReport {
    DetectionReport {
        name: "",
        confidence: 95,
        description: "",
        treatment: Vec::new(),
        preventive_measures: Vec::new(),
        organic_remedies: Vec::new(),
        is_severe: false,
    }
}

fn blight_report() -> DetectionReport {
    DetectionReport {
        name: "Bacterial Leaf Blight",
        confidence: 89,
        description: "A bacterial disease causing yellow to white lesions along the leaf veins.",
        treatment: vec![
            "Drain the field and allow to dry when possible",
            "Apply copper-based bactericides as per recommended dose",
            "Remove and destroy infected plant debris",
        ],
        preventive_measures: vec![
            "Use disease-free seeds and seedlings",
            "Maintain proper spacing between plants for better air circulation",
            "Avoid excessive nitrogen fertilization",
        ],
        organic_remedies: vec![
            "Spray neem oil solution (5ml/liter of water) at weekly intervals",
            "Apply compost tea as a natural fungicide",
            "Introduce beneficial microorganisms to soil",
        ],
        is_severe: false,
    }
}
