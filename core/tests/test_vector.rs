// Value type suite. Catches:

// * empty or ragged vectors slipping through construction
// * typed read-back ignoring the element width
// * blob wrapper losing or copying bytes
// * error taxonomy drift (InvalidArgument vs ResourceExhausted)

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use vector_blob_core::{
        types::{ErrorKind, VectorError},
        vector::{BinaryBlob, NumericVector},
    };

// # ✅ 1. Typed constructors

    #[test]
    fn from_f32_keeps_order_and_width() {
        let v = NumericVector::from_f32(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.element_width(), 4);
        assert_eq!(v.as_bytes().len(), 12);
        assert_eq!(v.to_vec::<f32>().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_i64_native_bytes() {
        let v = NumericVector::from_i64(&[-1, 7]).unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&(-1i64).to_ne_bytes());
        expected.extend_from_slice(&7i64.to_ne_bytes());
        assert_eq!(v.as_bytes(), expected.as_slice());
        assert_eq!(v.element(1).unwrap(), &7i64.to_ne_bytes());
        assert!(v.element(2).is_none());
    }

    #[test]
    fn iter_elements_yields_each_element() {
        let v = NumericVector::from_i32(&[10, 20, 30]).unwrap();
        let items: Vec<i32> = v
            .iter_elements()
            .map(|c| i32::from_ne_bytes(c.try_into().unwrap()))
            .collect();
        assert_eq!(items, vec![10, 20, 30]);
    }

// # ❌ 2. Empty vectors cannot be constructed

    #[test]
    fn empty_slices_rejected() {
        assert_eq!(NumericVector::from_f32(&[]).unwrap_err(), VectorError::EmptyVector);
        assert_eq!(NumericVector::from_f64(&[]).unwrap_err(), VectorError::EmptyVector);
        assert_eq!(NumericVector::from_i32(&[]).unwrap_err(), VectorError::EmptyVector);
        assert_eq!(NumericVector::from_i64(&[]).unwrap_err(), VectorError::EmptyVector);
    }

    #[test]
    fn empty_raw_parts_rejected() {
        assert_eq!(
            NumericVector::from_raw_parts(4, Vec::new()).unwrap_err(),
            VectorError::EmptyVector
        );
    }

// # ❌ 3. Raw parts validation

    #[test]
    fn raw_parts_width_must_be_registered() {
        for width in [0usize, 1, 2, 3, 5, 16] {
            assert_eq!(
                NumericVector::from_raw_parts(width, vec![0u8; 16]).unwrap_err(),
                VectorError::InvalidElementWidth { width }
            );
        }
    }

    #[test]
    fn raw_parts_must_be_whole_elements() {
        assert_eq!(
            NumericVector::from_raw_parts(8, vec![0u8; 12]).unwrap_err(),
            VectorError::RaggedPayload { len: 12, width: 8 }
        );
    }

    #[test]
    fn raw_parts_accepts_valid_payload() {
        let v = NumericVector::from_raw_parts(8, vec![0u8; 24]).unwrap();
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v.into_bytes().len(), 24);
    }

// # ❌ 4. Typed read-back binds width

    #[test]
    fn to_vec_rejects_wrong_width() {
        let v = NumericVector::from_f64(&[1.5]).unwrap();
        assert_eq!(
            v.to_vec::<f32>().unwrap_err(),
            VectorError::WidthMismatch { have: 8, need: 4 }
        );
        assert_eq!(v.to_vec::<i64>().unwrap().len(), 1);
    }

// # ✅ 5. Blob wrapper

    #[test]
    fn blob_wraps_owned_bytes() {
        let blob = BinaryBlob::from(vec![1u8, 2, 3]);
        assert_eq!(blob.len(), 3);
        assert!(!blob.is_empty());
        assert_eq!(blob.as_bytes(), &[1, 2, 3]);
        assert_eq!(AsRef::<[u8]>::as_ref(&blob), &[1, 2, 3]);

        let bytes: Bytes = blob.clone().into();
        assert_eq!(BinaryBlob::new(bytes), blob);
    }

// # ✅ 6. Error taxonomy

    #[test]
    fn resource_exhausted_is_distinct() {
        let err = VectorError::ResourceExhausted { bytes: 1 << 40 };
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert!(!err.is_invalid_argument());
        assert_eq!(VectorError::EmptyVector.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn vector_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NumericVector>();
        assert_send_sync::<BinaryBlob>();
        assert_send_sync::<VectorError>();
    }
}
