use uuid::Uuid;

/// Which operation a cart payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartValidationMode {
    Create,
    Update,
}

/// Cart fields as received from the client, before validation.
/// The option id is kept raw so that malformed ids are reported by validation.
#[derive(Debug, Clone, Default)]
pub struct CartPayload {
    pub product_option_id: Option<String>,
    pub quantity: Option<i32>,
}

/// Normalized payload. On create both fields are guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCart {
    pub product_option_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartValidationError {
    #[error("cart.product_option_required")]
    ProductOptionRequired,
    #[error("cart.malformed_product_option_id")]
    MalformedProductOptionId,
    #[error("cart.quantity_required")]
    QuantityRequired,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.empty_update")]
    EmptyUpdate,
}

pub fn validate_cart_data(
    payload: CartPayload,
    mode: CartValidationMode,
) -> Result<ValidatedCart, CartValidationError> {
    match mode {
        CartValidationMode::Create => {
            if payload.product_option_id.is_none() {
                return Err(CartValidationError::ProductOptionRequired);
            }
            if payload.quantity.is_none() {
                return Err(CartValidationError::QuantityRequired);
            }
        }
        CartValidationMode::Update => {
            if payload.product_option_id.is_none() && payload.quantity.is_none() {
                return Err(CartValidationError::EmptyUpdate);
            }
        }
    }

    if let Some(quantity) = payload.quantity
        && quantity < 1
    {
        return Err(CartValidationError::InvalidQuantity);
    }

    let product_option_id = payload
        .product_option_id
        .map(|raw| {
            Uuid::parse_str(raw.trim()).map_err(|_| CartValidationError::MalformedProductOptionId)
        })
        .transpose()?;

    Ok(ValidatedCart {
        product_option_id,
        quantity: payload.quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_complete_create_payload() {
        let option_id = Uuid::new_v4();

        let result = validate_cart_data(
            CartPayload {
                product_option_id: Some(option_id.to_string()),
                quantity: Some(3),
            },
            CartValidationMode::Create,
        );

        assert_eq!(
            result,
            Ok(ValidatedCart {
                product_option_id: Some(option_id),
                quantity: Some(3),
            })
        );
    }

    #[test]
    fn should_require_product_option_on_create() {
        let result = validate_cart_data(
            CartPayload {
                product_option_id: None,
                quantity: Some(1),
            },
            CartValidationMode::Create,
        );

        assert_eq!(result, Err(CartValidationError::ProductOptionRequired));
    }

    #[test]
    fn should_require_quantity_on_create() {
        let result = validate_cart_data(
            CartPayload {
                product_option_id: Some(Uuid::new_v4().to_string()),
                quantity: None,
            },
            CartValidationMode::Create,
        );

        assert_eq!(result, Err(CartValidationError::QuantityRequired));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let result = validate_cart_data(
            CartPayload {
                product_option_id: None,
                quantity: Some(-2),
            },
            CartValidationMode::Update,
        );

        assert_eq!(result, Err(CartValidationError::InvalidQuantity));
    }

    #[test]
    fn should_accept_partial_update() {
        let result = validate_cart_data(
            CartPayload {
                product_option_id: None,
                quantity: Some(5),
            },
            CartValidationMode::Update,
        );

        assert_eq!(result.unwrap().quantity, Some(5));
    }

    #[test]
    fn should_reject_update_without_fields() {
        let result = validate_cart_data(CartPayload::default(), CartValidationMode::Update);

        assert_eq!(result, Err(CartValidationError::EmptyUpdate));
    }

    #[test]
    fn should_reject_malformed_option_id() {
        let result = validate_cart_data(
            CartPayload {
                product_option_id: Some("large-blue".to_string()),
                quantity: Some(1),
            },
            CartValidationMode::Create,
        );

        assert_eq!(result, Err(CartValidationError::MalformedProductOptionId));
    }

    #[test]
    fn should_check_quantity_before_option_id_format() {
        let result = validate_cart_data(
            CartPayload {
                product_option_id: Some("large-blue".to_string()),
                quantity: Some(0),
            },
            CartValidationMode::Update,
        );

        assert_eq!(result, Err(CartValidationError::InvalidQuantity));
    }
}
