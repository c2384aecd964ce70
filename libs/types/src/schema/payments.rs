//! Payment-related objects

use crate::schema::type_ids;
use crate::schema_object;

schema_object! {
    /// Basic information about an invoice. Amounts are in the currency's
    /// smallest unit. No optional fields, so instances carry no presence
    /// mask.
    object Invoice("invoice", type_ids::INVOICE) as INVOICE_MANIFEST;
    builder InvoiceBuilder;
    required {
        title: string,
        description: string,
        start_parameter: string,
        currency: string,
        total_amount: int,
    }
    optional {}
}

schema_object! {
    /// Service message confirming a successful payment.
    object SuccessfulPayment("successful_payment", type_ids::SUCCESSFUL_PAYMENT) as SUCCESSFUL_PAYMENT_MANIFEST;
    builder SuccessfulPaymentBuilder;
    required {
        currency: string,
        total_amount: int,
        invoice_payload: string,
        telegram_payment_charge_id: string,
        provider_payment_charge_id: string,
    }
    optional {
        0 => shipping_option_id: string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_has_no_optional_fields() {
        assert!(INVOICE_MANIFEST.max_bit().is_none());
        let obj = InvoiceBuilder::new("Pro plan", "1 year", "pro", "EUR", 4900)
            .build()
            .unwrap();
        let invoice = Invoice::new(&obj).unwrap();
        assert_eq!(invoice.currency(), "EUR");
        assert_eq!(invoice.total_amount(), 4900);
    }
}
