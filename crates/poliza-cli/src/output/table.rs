use poliza_core::model::{
    AlertReason, PaymentKind, PaymentStatus, PersonType, PolicyExtractionResult,
};

pub fn print(result: &PolicyExtractionResult) {
    println!("=== Póliza ({}) ===\n", result.extractor);

    print_insured(result);
    print_policy(result);

    if let Some(vehicle) = &result.vehicle {
        println!("  Vehículo: {} {} {}", vehicle.brand, vehicle.model, vehicle.year);
        if !vehicle.vin.is_empty() {
            println!("    Serie {}  Motor {}  Placas {}", vehicle.vin, vehicle.engine_number, vehicle.plates);
        }
        println!("    {} / {} / {}", vehicle.color, vehicle.usage, vehicle.service);
        println!();
    }

    print_coverages(result);
    print_financials(result);
    print_schedule(result);
    print_alerts(result);
}

fn print_insured(result: &PolicyExtractionResult) {
    let insured = &result.insured;
    match insured.person_type {
        PersonType::Physical => {
            let n = &insured.name_parts;
            println!(
                "  Asegurado: {} {} {}",
                n.given_names, n.paternal_surname, n.maternal_surname
            );
        }
        PersonType::Moral => println!("  Asegurado: {}", insured.company_name),
    }
    println!("  RFC: {} (persona {})", insured.tax_id, insured.person_type);
    if !insured.email.is_empty() {
        println!("  Correo: {}", insured.email);
    }
    let addr = &insured.address;
    if !addr.street.is_empty() {
        println!(
            "  Domicilio: {}, Col. {}, {}, {} C.P. {}",
            addr.street, addr.colony, addr.municipality, addr.state, addr.postal_code
        );
    }
    println!();
}

fn print_policy(result: &PolicyExtractionResult) {
    let ids = &result.identifiers;
    println!(
        "  Póliza {}  Endoso {}  Inciso {}  Plan {}",
        ids.number, ids.endorsement, ids.item_number, ids.plan
    );
    println!(
        "  Vigencia: {} a {}",
        result.validity.start_date, result.validity.end_date
    );
    let plan = &result.payment_plan;
    let kind = match plan.kind {
        PaymentKind::Annual => "anual",
        PaymentKind::Installment => "fraccionado",
    };
    println!("  Pago: {} ({})", plan.frequency, kind);
    if !plan.due_date.is_empty() {
        println!("  Fecha límite de pago: {}", plan.due_date);
    }
    println!();
}

fn print_coverages(result: &PolicyExtractionResult) {
    if result.coverages.is_empty() {
        return;
    }
    println!("  Coberturas:");
    let max_name = result
        .coverages
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(10);
    for c in &result.coverages {
        println!(
            "    {:<width$}  {:>16}  {:>10}  {:>12}",
            c.name,
            c.sum_insured.to_string(),
            c.deductible,
            c.premium,
            width = max_name
        );
    }
    println!();
}

fn print_financials(result: &PolicyExtractionResult) {
    let f = &result.financials;
    println!("  Prima Neta:            {:>12}", f.net_premium);
    println!("  Otros Descuentos:      {:>12}", f.other_discounts);
    println!("  Recargo Fraccionado:   {:>12}", f.installment_surcharge);
    println!("  Gastos de Expedición:  {:>12}", f.issuance_fee);
    println!("  I.V.A.:                {:>12}", f.tax);
    println!("  Total:                 {:>12}", f.total);
    println!();
}

fn print_schedule(result: &PolicyExtractionResult) {
    if result.schedule.is_empty() {
        return;
    }
    println!("  Recibos:");
    for r in &result.schedule {
        let status = match r.status {
            PaymentStatus::Pending => "pendiente",
            PaymentStatus::Overdue => "vencido",
        };
        println!(
            "    {}  vence {}  {:>12}  {}",
            r.installment_number, r.due_date, r.amount, status
        );
    }
    println!();
}

fn print_alerts(result: &PolicyExtractionResult) {
    if result.alerts.is_empty() {
        return;
    }
    println!("  Alertas:");
    for alert in &result.alerts {
        let reason = match alert.reason {
            AlertReason::NotFound => "no encontrado",
            AlertReason::Malformed => "valor malformado",
            AlertReason::LowConfidence => "baja confianza",
        };
        if alert.detail.is_empty() {
            println!("    {} ({reason})", alert.field);
        } else {
            println!("    {} ({reason}: {})", alert.field, alert.detail);
        }
    }
}
