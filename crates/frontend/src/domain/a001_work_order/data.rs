use contracts::domain::a001_work_order::WorkOrder;

/// The in-memory work-order catalog. Stands in for a data feed: loaded once
/// when the page mounts, never mutated.
pub fn sample_work_orders() -> Vec<WorkOrder> {
    vec![
        WorkOrder {
            id: "30002".to_string(),
            product_type: "Wrist Flex".to_string(),
            component_status: "0/0/2".to_string(),
            digital_status: "Internally Approved".to_string(),
            physical_status: "Quality Approved".to_string(),
            print_by: "2025-10-07".to_string(),
            ship_by: "2025-10-09".to_string(),
            parts: vec![
                "Wrist Band, size M".to_string(),
                "Velcro Strip, size 12cm".to_string(),
                "Elastic Cord, size 20cm".to_string(),
            ],
            component_details: vec![
                "None Not Started".to_string(),
                "None Started".to_string(),
                "Wrist Support Base Finished".to_string(),
                "Wrist Strap Finished".to_string(),
            ],
        },
        WorkOrder {
            id: "30000".to_string(),
            product_type: "Ankle Foot Orthotic".to_string(),
            component_status: "2/0/0".to_string(),
            digital_status: "Internally Approved".to_string(),
            physical_status: "Insufficient Blueprints".to_string(),
            print_by: "2025-10-08".to_string(),
            ship_by: "2025-10-10".to_string(),
            parts: vec![
                "Upper Strap, size L".to_string(),
                "Lower Strap, size M".to_string(),
                "Ankle Padding, size 15cm".to_string(),
            ],
            component_details: vec![
                "Anterior Shell Not Started".to_string(),
                "Posterior Shell Not Started".to_string(),
                "None Finished".to_string(),
            ],
        },
        WorkOrder {
            id: "30001".to_string(),
            product_type: "AC Joint Pad".to_string(),
            component_status: "0/1/1".to_string(),
            digital_status: "Submitted".to_string(),
            physical_status: "Started".to_string(),
            print_by: "2025-10-09".to_string(),
            ship_by: "2025-10-11".to_string(),
            parts: vec![
                "Shoulder Strap, size XL".to_string(),
                "Padding Insert, size 8cm".to_string(),
            ],
            component_details: vec![
                "None Not Started".to_string(),
                "AC Joint Pad Started".to_string(),
                "AC Joint Base Finished".to_string(),
            ],
        },
        WorkOrder {
            id: "30003".to_string(),
            product_type: "Ringed Thumb Splint".to_string(),
            component_status: "1/1/0".to_string(),
            digital_status: "Assigned".to_string(),
            physical_status: "Sufficient Blueprints".to_string(),
            print_by: "-".to_string(),
            ship_by: "2025-10-12".to_string(),
            parts: vec![
                "Thumb Strap, size S".to_string(),
                "Support String, size 28cm".to_string(),
            ],
            component_details: vec![
                "Thumb Ring Not Started".to_string(),
                "Thumb Base Started".to_string(),
                "None Finished".to_string(),
            ],
        },
    ]
}
